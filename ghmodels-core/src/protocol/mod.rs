//! Protocol module for chat-completion request/response structures

pub mod types;

pub use types::{
    ChatRequest, ChatResponse, CompletionUsage, ContentPart, FunctionCall, FunctionDefinition,
    ImageDetail, ImageUrl, Message, MessageBuilder, MessageContent, MessageRole, ResponseChoice,
    ResponseFormat, ToolCall, ToolDefinition,
};
