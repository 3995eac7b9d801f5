//! Fault injection endpoints, for exercising client retry behavior.
//!
//! `/error` always fails; `/error2` alternates success and failure
//! driven by a process-wide counter.
//!
//! # Design Decisions
//! - The counter is an atomic: the `fetch_add` is the single
//!   serialization point, so each request observes a unique count and
//!   the odd/even pattern holds even under concurrent load

use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::State;

use crate::http::server::AppState;
use crate::http::AppError;

/// Process-wide request counter for `/error2`.
#[derive(Debug, Default)]
pub struct FaultCounter {
    count: AtomicU64,
}

impl FaultCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the post-increment count (first call → 1).
    pub fn next(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// `GET /error` — always 500.
pub async fn always_fail() -> AppError {
    AppError::Injected
}

/// `GET /error2` — OK on odd counts, 500 on even counts.
pub async fn alternate(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let count = state.fault.next();
    if count % 2 == 0 {
        Err(AppError::Injected)
    } else {
        Ok("OK\n")
    }
}
