//! Google Gemini `contents` adapter.
//!
//! **This adapter's shape is not a 1:1 role mapping.** Gemini has no system
//! role and requires strictly alternating `user`/`model` turns, so the
//! augmented context is smuggled in as prose: the sequence opens with a
//! synthetic user turn embedding the system context behind a fixed label,
//! followed by a synthetic model acknowledgment turn. Only then come the
//! caller's prior turns and the real user turn.

use serde::{Deserialize, Serialize};

use crate::providers::ChatMessage;
use crate::types::AugmentationResult;

/// Label prefixed to the system context in the synthetic opening turn.
pub const SYSTEM_CONTEXT_LABEL: &str = "System context: ";

/// Fixed acknowledgment text for the synthetic model turn.
pub const ACKNOWLEDGMENT: &str = "Understood. I will use this context to inform my responses.";

/// One Gemini content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A text part within a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    fn new(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Build the alternating `user`/`model` turn sequence.
///
/// Prior turns keep their order; an `assistant` role from shared history maps
/// to Gemini's `model` role.
pub fn build_contents(result: &AugmentationResult, history: &[ChatMessage]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 3);

    contents.push(Content::new(
        "user",
        format!("{}{}", SYSTEM_CONTEXT_LABEL, result.system_context),
    ));
    contents.push(Content::new("model", ACKNOWLEDGMENT));

    for turn in history {
        let role = if turn.role == "assistant" {
            "model"
        } else {
            &turn.role
        };
        contents.push(Content::new(role, &turn.content));
    }

    contents.push(Content::new("user", &result.user_prompt));
    contents
}
