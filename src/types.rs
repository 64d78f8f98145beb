//! Client-facing types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::signals::ContextSignals;

/// Downstream AI provider the augmentation is shaped for.
///
/// The known values exist for caller ergonomics; the client does not gatekeep
/// the list. [`Provider::Other`] carries any other value to the server
/// unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Perplexity,
    Cohere,
    Mistral,
    Llama,
    #[default]
    Generic,
    /// Any provider the client has no dedicated handling for.
    Other(String),
}

impl Provider {
    /// The wire value sent to the server.
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Perplexity => "perplexity",
            Self::Cohere => "cohere",
            Self::Mistral => "mistral",
            Self::Llama => "llama",
            Self::Generic => "generic",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Provider {
    fn from(s: &str) -> Self {
        match s {
            "openai" => Self::OpenAi,
            "anthropic" => Self::Anthropic,
            "google" => Self::Google,
            "perplexity" => Self::Perplexity,
            "cohere" => Self::Cohere,
            "mistral" => Self::Mistral,
            "llama" => Self::Llama,
            "generic" => Self::Generic,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Provider {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Options for a single augmentation call.
#[derive(Debug, Clone)]
pub struct AugmentOptions {
    /// Target provider the server should shape for.
    pub provider: Provider,
    /// Explicit signals; overrides detection when present.
    pub signals: Option<ContextSignals>,
    /// Include temporal context (time of day, recency).
    pub include_temporal: bool,
    /// Include spatial context (location, locale).
    pub include_spatial: bool,
    /// Include stored user preferences.
    pub include_preferences: bool,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            provider: Provider::Generic,
            signals: None,
            include_temporal: true,
            include_spatial: true,
            include_preferences: true,
        }
    }
}

impl AugmentOptions {
    /// Options targeting the given provider, everything else defaulted.
    pub fn for_provider(provider: Provider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }
}

/// Canonical augmentation result, independent of server field naming.
///
/// Invariants: `user_prompt` always holds a value (the original input prompt
/// when the server omits it) and `system_context` is an empty string rather
/// than absent, so callers never need null checks on the primary fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AugmentationResult {
    /// System-role framing produced by the server.
    pub system_context: String,
    /// The user prompt, possibly rewritten by the server.
    pub user_prompt: String,
    /// A fully combined prompt, when the server produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augmented_prompt: Option<String>,
    /// Server-defined metadata about the augmentation.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_values() {
        assert_eq!(Provider::OpenAi.as_str(), "openai");
        assert_eq!(Provider::Anthropic.as_str(), "anthropic");
        assert_eq!(Provider::Google.as_str(), "google");
        assert_eq!(Provider::Generic.as_str(), "generic");
        assert_eq!(Provider::Other("groq".to_string()).as_str(), "groq");
    }

    #[test]
    fn test_provider_round_trip() {
        for name in [
            "openai",
            "anthropic",
            "google",
            "perplexity",
            "cohere",
            "mistral",
            "llama",
            "generic",
        ] {
            let provider = Provider::from(name);
            assert!(!matches!(provider, Provider::Other(_)));
            assert_eq!(provider.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_provider_passes_through() {
        let provider = Provider::from("groq");
        assert_eq!(provider, Provider::Other("groq".to_string()));

        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"groq\"");
    }

    #[test]
    fn test_provider_serde() {
        let json = serde_json::to_string(&Provider::Anthropic).unwrap();
        assert_eq!(json, "\"anthropic\"");

        let provider: Provider = serde_json::from_str("\"mistral\"").unwrap();
        assert_eq!(provider, Provider::Mistral);
    }

    #[test]
    fn test_options_defaults() {
        let options = AugmentOptions::default();

        assert_eq!(options.provider, Provider::Generic);
        assert!(options.signals.is_none());
        assert!(options.include_temporal);
        assert!(options.include_spatial);
        assert!(options.include_preferences);
    }

    #[test]
    fn test_options_for_provider() {
        let options = AugmentOptions::for_provider(Provider::OpenAi);
        assert_eq!(options.provider, Provider::OpenAi);
        assert!(options.include_temporal);
    }
}
