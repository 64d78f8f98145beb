//! Ambient environment signal detection.
//!
//! Signals are best-effort, low-confidence hints (timezone, locale, device
//! class) used by the server to personalize augmentation. Detection never
//! fails: a missing capability degrades to an absent or default field.
//!
//! Host-runtime access goes through the [`Environment`] trait so tests can
//! substitute fixed values for the real process environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Locale reported when the host locale cannot be determined.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Device class reported when no user-agent-like string is available.
pub const DEFAULT_DEVICE: &str = "desktop";

/// Ambient context signals. All fields are best-effort; absence is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSignals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_context: Option<String>,
}

/// Capability interface over the host runtime.
///
/// The real implementation is [`HostEnvironment`]; tests inject an
/// implementation returning fixed values.
pub trait Environment: Send + Sync + std::fmt::Debug {
    /// IANA timezone name or UTC-offset string, if the host exposes one.
    fn timezone(&self) -> Option<String>;

    /// Host locale, if determinable.
    fn locale(&self) -> Option<String>;

    /// A user-agent-like string describing the host, if one exists.
    fn user_agent(&self) -> Option<String>;
}

/// Host runtime environment backed by process environment variables.
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment;

impl Environment for HostEnvironment {
    fn timezone(&self) -> Option<String> {
        match std::env::var("TZ") {
            Ok(tz) if !tz.trim().is_empty() => Some(tz),
            // No IANA name available; report the host UTC offset instead.
            _ => Some(format!("UTC{}", chrono::Local::now().format("%:z"))),
        }
    }

    fn locale(&self) -> Option<String> {
        let raw = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .ok()?;
        normalize_locale(&raw)
    }

    fn user_agent(&self) -> Option<String> {
        // Host processes carry no user agent; device classification falls
        // through to the default.
        None
    }
}

/// Normalize a POSIX locale string (`en_US.UTF-8`) to BCP-47 form (`en-US`).
fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw.split('.').next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Classify a device from a user-agent-like string.
///
/// Checks for `"Mobile"` then `"Tablet"`; anything else (including no
/// string at all) is a desktop.
fn classify_device(user_agent: Option<&str>) -> String {
    match user_agent {
        Some(ua) if ua.contains("Mobile") => "mobile".to_string(),
        Some(ua) if ua.contains("Tablet") => "tablet".to_string(),
        _ => DEFAULT_DEVICE.to_string(),
    }
}

/// Detect ambient signals from the given environment.
///
/// Detection policy: a timezone that cannot be resolved is omitted; a locale
/// that cannot be resolved defaults to [`DEFAULT_LOCALE`]; the device class
/// always resolves, defaulting to [`DEFAULT_DEVICE`]. This function never
/// errors.
pub fn detect(env: &dyn Environment) -> ContextSignals {
    let signals = ContextSignals {
        timezone: env.timezone(),
        locale: env.locale().or_else(|| Some(DEFAULT_LOCALE.to_string())),
        location: None,
        device: Some(classify_device(env.user_agent().as_deref())),
        session_context: None,
    };
    debug!(?signals, "Detected environment signals");
    signals
}
