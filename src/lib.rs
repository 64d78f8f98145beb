//! Async client for the context augmentation service.
//!
//! Sends a user prompt to a remote augmentation server and returns a
//! structured payload (system context + user prompt + metadata) ready to
//! hand to a downstream LLM API.
//!
//! # Architecture
//!
//! - **`config`** - client configuration with eager validation
//! - **`signals`** - best-effort ambient signal detection behind an
//!   injectable [`Environment`](signals::Environment) capability
//! - **`wire`** - outbound request assembly and inbound normalization
//! - **`client`** - [`AugmentClient`] facade and HTTP transport (timeouts,
//!   error classification)
//! - **`providers`** - pure adapters reshaping one [`AugmentationResult`]
//!   into each provider's native request shape
//!
//! # Example
//!
//! ```no_run
//! use augment_client_rs::{AugmentClient, AugmentOptions, ClientConfig, Provider};
//! use augment_client_rs::providers::openai;
//!
//! # async fn run() -> augment_client_rs::Result<()> {
//! let client = AugmentClient::new(ClientConfig::new("http://localhost:8000"))?;
//! let result = client
//!     .augment("What should I eat?", AugmentOptions::for_provider(Provider::OpenAi))
//!     .await?;
//! let messages = openai::build_messages(&result, &[]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod providers;
pub mod signals;
pub mod types;
pub mod wire;

pub use client::AugmentClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use providers::{adapter_for, ChatMessage, ProviderAdapter};
pub use signals::{ContextSignals, Environment, HostEnvironment};
pub use types::{AugmentOptions, AugmentationResult, Provider};

/// Client version, sent in the user agent of every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
