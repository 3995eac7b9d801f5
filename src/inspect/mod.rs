//! Plain diagnostic endpoints.
//!
//! # Data Flow
//! ```text
//! GET /host | /ip | /env | /headers | /source | /hello | /
//!     → handlers.rs (format one collaborator-provided fact as text)
//!     → facts.rs (hostname / IPv4 lookup, never fails, "unknown" fallback)
//! ```
//!
//! These handlers have no failure path: a lookup that cannot be answered
//! degrades to a fixed sentinel instead of an error status.

pub mod facts;
pub mod handlers;

pub use handlers::{environment, headers, hello, host, ip_address, source};
