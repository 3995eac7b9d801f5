//! Directory listing endpoint.
//!
//! # Data Flow
//! ```text
//! GET /ls?path=…
//!     → sanitize.rs (lexical normalization, traversal rejection)
//!     → tokio::fs::read_dir (immediate entries only)
//!     → "Directory: <path>" + one entry name per line
//! ```
//!
//! # Design Decisions
//! - Sanitization runs before any filesystem access; a rejected path
//!   never reaches the directory read
//! - Entry names are collected fully before the response is built, so a
//!   read failure never produces partial output
//! - No ordering guarantee on entries

pub mod sanitize;

use axum::extract::Query;
use serde::Deserialize;

use crate::http::AppError;
use self::sanitize::sanitize_path;

/// Query parameters for `/ls`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    path: Option<String>,
}

/// `GET /ls` — list the immediate entries of a directory.
///
/// Defaults to `/` when the `path` parameter is missing or empty.
pub async fn list_directory(Query(query): Query<ListQuery>) -> Result<String, AppError> {
    let raw = match query.path.as_deref() {
        Some(path) if !path.is_empty() => path,
        _ => "/",
    };

    let safe_path = sanitize_path(raw).inspect_err(|error| {
        tracing::warn!(path = %raw, error = %error, "Path rejected by sanitizer");
    })?;

    let mut entries = tokio::fs::read_dir(&safe_path)
        .await
        .map_err(|source| AppError::DirectoryRead {
            path: safe_path.clone(),
            source,
        })?;

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(source) => {
                return Err(AppError::DirectoryRead {
                    path: safe_path,
                    source,
                })
            }
        }
    }

    tracing::info!(
        path = %safe_path.display(),
        entries = names.len(),
        "Directory listing successful"
    );

    let mut body = format!("Directory: {}\n", safe_path.display());
    for name in &names {
        body.push_str(name);
        body.push('\n');
    }
    Ok(body)
}
