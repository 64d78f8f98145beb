//! Augmentation client facade and HTTP transport.
//!
//! [`AugmentClient`] is the single entry point: it owns the configuration,
//! the lazily populated signal cache, and the HTTP client. Every
//! network-touching method is an independent async call bounded by the
//! configured timeout; failures are classified into the single
//! [`Error`](crate::Error) taxonomy.

use std::sync::{Arc, Mutex};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::signals::{self, ContextSignals, Environment, HostEnvironment};
use crate::types::{AugmentOptions, AugmentationResult};
use crate::wire::{
    build_augment_request, normalize_response, ContextRequest, HealthResponse,
    RawAugmentResponse, HEALTHY_STATUS,
};
use crate::VERSION;

/// User agent string for API requests.
fn user_agent() -> String {
    format!("augment-client-rs/{} (rust)", VERSION)
}

/// Client for the context augmentation service.
///
/// Stateless apart from the one-shot signal cache: signals are detected at
/// most once per instance and reused for its lifetime (see
/// [`refresh_signals`](Self::refresh_signals) for explicit re-detection).
/// Methods may run concurrently from the same instance.
#[derive(Debug, Clone)]
pub struct AugmentClient {
    client: Client,
    config: ClientConfig,
    environment: Arc<dyn Environment>,
    session_id: String,
    signal_cache: Arc<Mutex<Option<ContextSignals>>>,
}

impl AugmentClient {
    /// Create a new client.
    ///
    /// Validates the configuration eagerly; no network access happens here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `server_url` is empty or unparseable.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_environment(config, Arc::new(HostEnvironment))
    }

    /// Create a client with a custom [`Environment`] for signal detection.
    pub fn with_environment(config: ClientConfig, environment: Arc<dyn Environment>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(user_agent())
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            environment,
            session_id: Uuid::new_v4().to_string(),
            signal_cache: Arc::new(Mutex::new(None)),
        })
    }

    /// The configured server URL.
    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    /// Augment a prompt with server-side context.
    ///
    /// Any string is accepted, including empty; the server decides what
    /// constitutes a usable prompt. When `auto_detect` is on and no explicit
    /// signals are supplied, ambient signals are detected once and cached.
    ///
    /// On success the result always carries a non-absent `user_prompt` and
    /// `system_context`; on failure a classified error is returned, never a
    /// partial result.
    pub async fn augment(
        &self,
        prompt: &str,
        options: AugmentOptions,
    ) -> Result<AugmentationResult> {
        let signals = self.resolve_signals(options.signals.clone());
        let request = build_augment_request(prompt, &self.config.user_id, &options, signals);

        debug!(provider = %options.provider, "Sending augment request");
        let raw: RawAugmentResponse = self.post_json("augment", &request).await?;

        Ok(normalize_response(raw, prompt))
    }

    /// Fetch the raw context payload for the configured user.
    ///
    /// No normalization is applied; the server's JSON is returned as-is.
    pub async fn get_context(&self, signals: Option<ContextSignals>) -> Result<Value> {
        let request = ContextRequest {
            user_id: self.config.user_id.clone(),
            signals: self.resolve_signals(signals),
        };
        self.post_json("context", &request).await
    }

    /// Probe the server's health endpoint.
    ///
    /// Returns `true` only when the call succeeds and the reported status is
    /// the literal `"healthy"`. Every failure mode (network, non-2xx, wrong
    /// status, malformed body) returns `false`; this method never errors, so
    /// health polling needs no error handling.
    pub async fn health_check(&self) -> bool {
        let url = self.endpoint("health");
        let response = match self.send(self.client.get(&url)).await {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "Health check failed");
                return false;
            }
        };

        match self.handle_response::<HealthResponse>(response).await {
            Ok(health) => health.status == HEALTHY_STATUS,
            Err(e) => {
                debug!(error = %e, "Health check failed");
                false
            }
        }
    }

    /// Explicitly re-detect ambient signals, replacing the cache.
    ///
    /// The cache never expires on its own; this is the only way to pick up
    /// environment changes within one client instance.
    pub fn refresh_signals(&self) -> ContextSignals {
        let detected = signals::detect(self.environment.as_ref());
        let mut cache = self.signal_cache.lock().unwrap_or_else(|e| e.into_inner());
        *cache = Some(detected.clone());
        detected
    }

    /// Resolve the signals for one call: explicit beats cached/detected.
    fn resolve_signals(&self, explicit: Option<ContextSignals>) -> ContextSignals {
        if let Some(signals) = explicit {
            return signals;
        }
        if !self.config.auto_detect {
            return ContextSignals::default();
        }

        let mut cache = self.signal_cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.clone() {
            return cached;
        }
        let detected = signals::detect(self.environment.as_ref());
        *cache = Some(detected.clone());
        detected
    }

    /// Build the full URL for an endpoint.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.server_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and decode the JSON reply.
    async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.endpoint(path);
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);

        let response = self.send(request).await?;
        self.handle_response(response).await
    }

    /// Send a request with identity headers, classifying transport failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request_id = Uuid::new_v4().to_string();

        request
            .header("X-User-Id", &self.config.user_id)
            .header("X-Request-Session-Id", &self.session_id)
            .header("X-Request-Id", &request_id)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))
    }

    /// Handle an HTTP response, extracting errors.
    ///
    /// Non-2xx bodies are read fully so the diagnostic text travels with the
    /// error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Server returned error status");
            return Err(Error::api(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Connection(format!("Failed to decode response: {}", e)))
    }

    /// Map a reqwest failure onto the error taxonomy.
    fn classify_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            Error::Connection(e.to_string())
        }
    }
}
