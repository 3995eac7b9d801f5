//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware)
//!     → request.rs (request ID stamping)
//!     → endpoint handlers (inspect / listing / relay / fault)
//!     → error.rs (AppError → status + message) on failure
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
