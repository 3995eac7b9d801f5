//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees
//! syntactically. Validation is a pure function and returns all errors,
//! not just the first, so operators can fix a config in one pass.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::MultitoolConfig;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("relay.timeout_secs must be greater than zero")]
    ZeroRelayTimeout,

    #[error("relay.default_url {url:?} is invalid: {reason}")]
    InvalidDefaultUrl { url: String, reason: String },
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &MultitoolConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.relay.timeout_secs == 0 {
        errors.push(ValidationError::ZeroRelayTimeout);
    }

    match Url::parse(&config.relay.default_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidDefaultUrl {
            url: config.relay.default_url.clone(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidDefaultUrl {
            url: config.relay.default_url.clone(),
            reason: e.to_string(),
        }),
    }

    errors
}
