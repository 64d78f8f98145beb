//! Anthropic Messages API adapter.
//!
//! The augmented context travels as the top-level `system` field, verbatim;
//! `messages` holds the prior turns followed by the current user turn.

use serde::Serialize;

use crate::providers::ChatMessage;
use crate::types::AugmentationResult;

/// Default model when the caller does not override it.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default max output tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Optional overrides for the request.
#[derive(Debug, Clone, Default)]
pub struct AnthropicOptions {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
}

/// Request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

/// Build an Anthropic Messages API request.
pub fn build_request(
    result: &AugmentationResult,
    history: &[ChatMessage],
    options: AnthropicOptions,
) -> AnthropicRequest {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(&result.user_prompt));

    AnthropicRequest {
        model: options.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        system: result.system_context.clone(),
        messages,
    }
}
