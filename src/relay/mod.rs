//! Outbound HTTP relay endpoint.
//!
//! # Data Flow
//! ```text
//! GET /req?url=…
//!     → validate_url (absolute, http/https only — before any network call)
//!     → shared reqwest client (bounded total timeout)
//!     → upstream status + Content-Type + raw body relayed verbatim
//! ```
//!
//! # Design Decisions
//! - Scheme check happens before the client is touched; no request is
//!   ever issued for a non-http(s) URL
//! - The body is fully buffered, so status and headers are final before
//!   the first body byte is written
//! - No retries and no inbound→outbound cancellation propagation

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use url::Url;

use crate::http::server::AppState;
use crate::http::AppError;

/// Query parameters for `/req`.
#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    url: Option<String>,
}

/// Parse and validate a relay target.
///
/// The URL must be absolute with an `http` or `https` scheme.
pub fn validate_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::UnsupportedScheme(other.to_string())),
    }
}

/// `GET /req` — fetch a URL on behalf of the caller and forward the
/// upstream response.
///
/// Defaults to the configured placeholder URL when the `url` parameter
/// is missing or empty.
pub async fn relay(
    State(state): State<AppState>,
    Query(query): Query<RelayQuery>,
) -> Result<Response, AppError> {
    let raw = match query.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => state.config.relay.default_url.as_str(),
    };

    let url = validate_url(raw)?;

    tracing::debug!(url = %url, "Relaying request");

    let upstream = state
        .client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| AppError::UpstreamRequest {
            url: url.to_string(),
            source,
        })?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("text/plain"));

    let body: Bytes = upstream
        .bytes()
        .await
        .map_err(|source| AppError::UpstreamRead {
            url: url.to_string(),
            source,
        })?;

    tracing::debug!(
        url = %url,
        status = %status,
        bytes = body.len(),
        "Relay complete"
    );

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
