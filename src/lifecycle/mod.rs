//! Lifecycle management subsystem.
//!
//! ```text
//! Startup:  parse CLI → load config → env overrides → validate → serve
//! Shutdown: Ctrl+C → Shutdown::trigger → server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
