//! Handlers for the plain diagnostic endpoints.

use std::env;
use std::fmt::Write as _;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;

use crate::http::server::AppState;
use crate::inspect::facts;

/// `GET /host`
pub async fn host() -> String {
    format!("HostName: {}\n", facts::hostname())
}

/// `GET /ip`
pub async fn ip_address() -> String {
    format!("IP Address: {}\n", facts::ipv4_address())
}

/// `GET /env` — the process environment, one `KEY=VALUE` per line.
pub async fn environment() -> String {
    let mut out = String::new();
    for (key, value) in env::vars() {
        let _ = writeln!(out, "{key}={value}");
    }
    out
}

/// `GET /headers` — inbound request headers, one `Name Value` line per
/// header value.
pub async fn headers(headers: HeaderMap) -> String {
    let mut out = String::new();
    for (name, value) in &headers {
        let _ = writeln!(out, "{} {}", name, String::from_utf8_lossy(value.as_bytes()));
    }
    out
}

/// `GET /source` — the caller's remote address.
pub async fn source(ConnectInfo(addr): ConnectInfo<SocketAddr>) -> String {
    format!("-------------------\n{addr}\n")
}

/// `GET /hello` and `GET /` — hostname and IP on one line, with the
/// configured return text appended when set.
pub async fn hello(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> String {
    tracing::info!(remote = %addr, "Hello request");

    let mut line = format!(
        "HostName: {} IP Address: {}",
        facts::hostname(),
        facts::ipv4_address()
    );
    if let Some(text) = &state.config.identity.return_text {
        line.push(' ');
        line.push_str(text);
    }
    line.push('\n');
    line
}
