//! Wire types for the augmentation server API.
//!
//! Outbound payloads use the server's flattened snake_case field names;
//! unset optional fields are omitted entirely, never sent as null. Inbound
//! replies are fully optional on the wire and normalized into the canonical
//! [`AugmentationResult`] here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::signals::ContextSignals;
use crate::types::{AugmentOptions, AugmentationResult, Provider};

/// Request body for the augment endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AugmentRequest {
    pub prompt: String,
    pub user_id: String,
    pub provider: Provider,
    pub signals: ContextSignals,
    pub options: RequestOptions,
}

/// Augmentation toggles, in wire form.
#[derive(Debug, Clone, Serialize)]
pub struct RequestOptions {
    pub include_temporal: bool,
    pub include_spatial: bool,
    pub include_preferences: bool,
}

/// Request body for the context endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContextRequest {
    pub user_id: String,
    pub signals: ContextSignals,
}

/// Raw reply from the augment endpoint. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAugmentResponse {
    pub system_context: Option<String>,
    pub user_prompt: Option<String>,
    pub augmented_prompt: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

/// Reply from the health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// Status value the health endpoint must report to count as healthy.
pub const HEALTHY_STATUS: &str = "healthy";

/// Assemble the outbound augment request.
pub fn build_augment_request(
    prompt: &str,
    user_id: &str,
    options: &AugmentOptions,
    signals: ContextSignals,
) -> AugmentRequest {
    AugmentRequest {
        prompt: prompt.to_string(),
        user_id: user_id.to_string(),
        provider: options.provider.clone(),
        signals,
        options: RequestOptions {
            include_temporal: options.include_temporal,
            include_spatial: options.include_spatial,
            include_preferences: options.include_preferences,
        },
    }
}

/// Normalize a raw server reply into the canonical result.
///
/// Missing `system_context` becomes an empty string, a missing `user_prompt`
/// echoes the original request prompt, and missing `metadata` becomes an
/// empty map.
pub fn normalize_response(raw: RawAugmentResponse, original_prompt: &str) -> AugmentationResult {
    AugmentationResult {
        system_context: raw.system_context.unwrap_or_default(),
        user_prompt: raw
            .user_prompt
            .unwrap_or_else(|| original_prompt.to_string()),
        augmented_prompt: raw.augmented_prompt,
        metadata: raw.metadata.unwrap_or_default(),
    }
}
