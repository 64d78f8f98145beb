//! Provider adapters.
//!
//! Each adapter is a stateless, pure transformation from one
//! [`AugmentationResult`] into a downstream provider's native request shape.
//! Adapters are independent: adding a provider means adding a module and a
//! registry entry, never touching the existing adapters.
//!
//! The typed entry points ([`openai::build_messages`],
//! [`anthropic::build_request`], [`google::build_contents`]) are the primary
//! API; [`adapter_for`] offers a uniform dynamic dispatch over the
//! [`Provider`] enumeration for callers that select a provider at runtime.

pub mod anthropic;
pub mod google;
pub mod openai;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::{AugmentationResult, Provider};

/// A single chat turn, shared by the role-based provider shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A user-role turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// An assistant-role turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// A system-role turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Uniform adapter contract: result + prior turns in, provider payload out.
pub trait ProviderAdapter: Send + Sync {
    /// Build the provider's native request payload.
    fn build_payload(&self, result: &AugmentationResult, history: &[ChatMessage]) -> Value;
}

struct OpenAiAdapter;
struct AnthropicAdapter;
struct GoogleAdapter;
struct GenericAdapter;

impl ProviderAdapter for OpenAiAdapter {
    fn build_payload(&self, result: &AugmentationResult, history: &[ChatMessage]) -> Value {
        json!({ "messages": openai::build_messages(result, history) })
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn build_payload(&self, result: &AugmentationResult, history: &[ChatMessage]) -> Value {
        serde_json::to_value(anthropic::build_request(
            result,
            history,
            anthropic::AnthropicOptions::default(),
        ))
        .unwrap_or(Value::Null)
    }
}

impl ProviderAdapter for GoogleAdapter {
    fn build_payload(&self, result: &AugmentationResult, history: &[ChatMessage]) -> Value {
        json!({ "contents": google::build_contents(result, history) })
    }
}

impl ProviderAdapter for GenericAdapter {
    fn build_payload(&self, result: &AugmentationResult, _history: &[ChatMessage]) -> Value {
        json!({
            "system": result.system_context,
            "prompt": result.user_prompt,
        })
    }
}

/// Look up the adapter registered for a provider.
///
/// Providers without a dedicated shape fall back to the generic pass-through
/// adapter.
pub fn adapter_for(provider: &Provider) -> &'static dyn ProviderAdapter {
    match provider {
        Provider::OpenAi => &OpenAiAdapter,
        Provider::Anthropic => &AnthropicAdapter,
        Provider::Google => &GoogleAdapter,
        _ => &GenericAdapter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AugmentationResult {
        AugmentationResult {
            system_context: "You are helping Alice.".to_string(),
            user_prompt: "What's next?".to_string(),
            augmented_prompt: None,
            metadata: Default::default(),
        }
    }

    #[test]
    fn test_registry_dispatch() {
        let result = result();

        let openai = adapter_for(&Provider::OpenAi).build_payload(&result, &[]);
        assert_eq!(openai["messages"][0]["role"], "system");

        let anthropic = adapter_for(&Provider::Anthropic).build_payload(&result, &[]);
        assert_eq!(anthropic["system"], "You are helping Alice.");

        let google = adapter_for(&Provider::Google).build_payload(&result, &[]);
        assert_eq!(google["contents"][0]["role"], "user");
    }

    #[test]
    fn test_generic_fallback() {
        let result = result();

        for provider in [
            Provider::Generic,
            Provider::Cohere,
            Provider::Other("groq".to_string()),
        ] {
            let payload = adapter_for(&provider).build_payload(&result, &[]);
            assert_eq!(payload["system"], "You are helping Alice.");
            assert_eq!(payload["prompt"], "What's next?");
        }
    }

    #[test]
    fn test_chat_message_constructors() {
        assert_eq!(ChatMessage::user("hi").role, "user");
        assert_eq!(ChatMessage::assistant("hello").role, "assistant");
        assert_eq!(ChatMessage::system("ctx").role, "system");
    }
}
