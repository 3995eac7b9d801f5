//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → MultitoolConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the server runs with no config file
//! - Environment overrides (COMPONENT, RETURN_TEXT) are applied once at
//!   startup; handlers never read them directly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::{IdentityConfig, ListenerConfig, MultitoolConfig, RelayConfig};
pub use validation::validate_config;
