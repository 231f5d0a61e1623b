//! What a run prints

use super::error::RunnerError;
use crate::protocol::types::{ChatResponse, ToolCall};
use tracing::warn;

/// Result of a run: either the tool calls of the first choice or its text
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutput {
    /// The model asked for one or more tool invocations
    ToolCalls(Vec<ToolCall>),
    /// Plain text reply
    Text(String),
}

impl RunOutput {
    /// Pick the output from the first choice of a response
    ///
    /// Tool calls take precedence over text. A choice with neither yields
    /// empty text.
    pub fn from_response(response: ChatResponse) -> Result<Self, RunnerError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(RunnerError::EmptyResponse)?;

        let message = choice.message;
        match message.tool_calls {
            Some(tool_calls) if !tool_calls.is_empty() => Ok(RunOutput::ToolCalls(tool_calls)),
            _ => {
                let text = message
                    .content
                    .map(|content| content.to_text())
                    .unwrap_or_else(|| {
                        warn!("First choice carried neither content nor tool calls");
                        String::new()
                    });
                Ok(RunOutput::Text(text))
            }
        }
    }

    /// Render for printing: tool calls as pretty JSON, text verbatim
    pub fn render(&self) -> Result<String, RunnerError> {
        match self {
            RunOutput::ToolCalls(tool_calls) => Ok(serde_json::to_string_pretty(tool_calls)?),
            RunOutput::Text(text) => Ok(text.clone()),
        }
    }
}
