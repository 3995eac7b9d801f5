//! Error type shared by all endpoint handlers.
//!
//! Every failure is handled at the point of occurrence: the handler
//! returns an [`AppError`] and the `IntoResponse` impl turns it into an
//! HTTP status plus a human-readable message. Nothing is retried, and
//! every surfaced error produces a log line.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the endpoint handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Path failed sanitization (traversal attempt or unresolvable).
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Directory could not be read at the sanitized path.
    #[error("Error reading directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `url` parameter is not a well-formed absolute URL.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// URL scheme other than http/https.
    #[error("Only http and https URLs are allowed (got {0:?})")]
    UnsupportedScheme(String),

    /// Upstream GET failed (connect, DNS, timeout).
    #[error("Failed to make request to {url}: {source}")]
    UpstreamRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream responded but the body could not be read.
    #[error("Failed to read response from {url}: {source}")]
    UpstreamRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Deliberate failure from the fault-injection endpoints.
    #[error("Internal Server Error")]
    Injected,
}

impl AppError {
    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) | Self::InvalidUrl(_) | Self::UnsupportedScheme(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DirectoryRead { .. } | Self::UpstreamRead { .. } | Self::Injected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::UpstreamRequest { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Injected failures are expected; everything else is logged with
        // its cause so no error is silently swallowed.
        match &self {
            Self::Injected => {
                tracing::debug!("Returning injected failure");
            }
            error if status.is_client_error() => {
                tracing::warn!(status = %status, error = %error, "Request rejected");
            }
            error => {
                tracing::error!(status = %status, error = %error, "Request failed");
            }
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            AppError::InvalidPath("..".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidUrl("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedScheme("ftp".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn server_side_failures_map_to_500() {
        let read_err = AppError::DirectoryRead {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(read_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Injected.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_embed_the_cause() {
        let err = AppError::DirectoryRead {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let message = err.to_string();
        assert!(message.contains("/missing"));
        assert!(message.contains("no such directory"));
    }
}
