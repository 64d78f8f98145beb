//! Client configuration.
//!
//! A [`ClientConfig`] is built once, validated eagerly when the client is
//! constructed, and is immutable for the life of that client instance.
//!
//! Settings are resolved in order:
//! 1. Explicit values set on the config
//! 2. Environment variables (`AUGMENT_SERVER_URL`, `AUGMENT_USER_ID`,
//!    `AUGMENT_TIMEOUT_MS`)

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default caller identity when none is configured.
pub const DEFAULT_USER_ID: &str = "default";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for an [`AugmentClient`](crate::AugmentClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the augmentation server.
    pub server_url: String,
    /// Caller identity, sent with every request.
    pub user_id: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Detect ambient environment signals when none are supplied.
    pub auto_detect: bool,
}

impl ClientConfig {
    /// Create a config for the given server URL with default settings.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            user_id: DEFAULT_USER_ID.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            auto_detect: true,
        }
    }

    /// Resolve a config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `AUGMENT_SERVER_URL` is not set.
    pub fn from_env() -> Result<Self> {
        let server_url = std::env::var("AUGMENT_SERVER_URL").map_err(|_| {
            Error::Config(
                "Server URL is required. Provide it via ClientConfig::new or \
                 the AUGMENT_SERVER_URL environment variable"
                    .to_string(),
            )
        })?;

        let mut config = Self::new(server_url);
        if let Ok(user_id) = std::env::var("AUGMENT_USER_ID") {
            config.user_id = user_id;
        }
        if let Ok(timeout) = std::env::var("AUGMENT_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                config.timeout_ms = ms;
            }
        }
        Ok(config)
    }

    /// Set the caller identity.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Set the per-request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Enable or disable automatic signal detection.
    pub fn with_auto_detect(mut self, auto_detect: bool) -> Self {
        self.auto_detect = auto_detect;
        self
    }

    /// Validate the config without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `server_url` is empty or not a
    /// parseable URL.
    pub fn validate(&self) -> Result<()> {
        if self.server_url.trim().is_empty() {
            return Err(Error::Config("server_url must not be empty".to_string()));
        }
        reqwest::Url::parse(&self.server_url)
            .map_err(|e| Error::Config(format!("Invalid server_url '{}': {}", self.server_url, e)))?;
        Ok(())
    }
}
