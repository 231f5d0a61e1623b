//! The fixed conversation sent on every run

use crate::protocol::types::{ContentPart, Message};

/// System instruction, always first
pub const SYSTEM_PROMPT: &str = "World's best coder";

/// User turns, in dialogue order
pub const USER_PROMPTS: [&str; 2] = [
    "Update or game engine we're coding in c+ and linux using .svg as the modle texture to maximum fps\n",
    "Update or game egine so we can test the game\n",
];

/// The ordered message sequence: system prompt, then each user turn as a
/// single text content item
pub fn conversation() -> Vec<Message> {
    std::iter::once(Message::system(SYSTEM_PROMPT))
        .chain(
            USER_PROMPTS
                .iter()
                .map(|prompt| Message::user_parts(vec![ContentPart::text(*prompt)])),
        )
        .collect()
}
