//! Network Multitool Diagnostic Server
//!
//! A small HTTP server exposing introspection endpoints for debugging
//! containerized deployments: hostname, IP address, environment, request
//! headers, directory listing, deliberate failures, and an outbound HTTP
//! relay.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │               MULTITOOL SERVER                 │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐    ┌──────────────────────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│  inspect  (host/ip/env/  │  │
//!                    │  │ server  │    │            headers/hello) │  │
//!                    │  └─────────┘    ├──────────────────────────┤  │
//!                    │       │         │  listing  (/ls, sanitize) │  │
//!                    │       │         ├──────────────────────────┤  │
//!                    │       │         │  relay    (/req)          │──┼──▶ Upstream
//!                    │       │         ├──────────────────────────┤  │
//!                    │       │         │  fault    (/error[2])     │  │
//!                    │       ▼         └──────────────────────────┘  │
//!                    │  ┌────────────────────────────────────────┐   │
//!                    │  │      Cross-Cutting Concerns            │   │
//!                    │  │  config   lifecycle   tracing/req-id   │   │
//!                    │  └────────────────────────────────────────┘   │
//!                    └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;

// Endpoint groups
pub mod fault;
pub mod inspect;
pub mod listing;
pub mod relay;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::MultitoolConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
