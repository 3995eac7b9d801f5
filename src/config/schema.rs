//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the multitool server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MultitoolConfig {
    /// Listener configuration (bind address, inbound timeout).
    pub listener: ListenerConfig,

    /// Outbound relay settings for the `/req` endpoint.
    pub relay: RelayConfig,

    /// Instance identity used in responses and logs.
    pub identity: IdentityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Inbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Outbound relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Total timeout for an upstream request in seconds.
    pub timeout_secs: u64,

    /// URL fetched when `/req` is called without a `url` parameter.
    pub default_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            default_url: "http://google.com".to_string(),
        }
    }
}

/// Instance identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Component name, diagnostic only. Overridden by the COMPONENT
    /// environment variable when set.
    pub component: String,

    /// Extra text appended to the `/hello` response. Overridden by the
    /// RETURN_TEXT environment variable when set.
    pub return_text: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            component: "component0".to_string(),
            return_text: None,
        }
    }
}
