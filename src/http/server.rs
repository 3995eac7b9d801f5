//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all endpoint handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Build the shared outbound client for the relay endpoint
//! - Serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::MultitoolConfig;
use crate::fault::{self, FaultCounter};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::{inspect, listing, relay};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MultitoolConfig>,
    pub client: reqwest::Client,
    pub fault: Arc<FaultCounter>,
}

/// HTTP server for the multitool endpoints.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the outbound relay client cannot be constructed.
    pub fn new(config: MultitoolConfig) -> Result<Self, reqwest::Error> {
        let config = Arc::new(config);

        // One client for the process; the timeout bounds the whole
        // upstream exchange, not just the connect.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.relay.timeout_secs))
            .build()?;

        let state = AppState {
            config: config.clone(),
            client,
            fault: Arc::new(FaultCounter::new()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all endpoints and middleware layers.
    fn build_router(config: &MultitoolConfig, state: AppState) -> Router {
        Router::new()
            .route("/req", get(relay::relay))
            .route("/source", get(inspect::source))
            .route("/error", get(fault::always_fail))
            .route("/error2", get(fault::alternate))
            .route("/host", get(inspect::host))
            .route("/ip", get(inspect::ip_address))
            .route("/env", get(inspect::environment))
            .route("/headers", get(inspect::headers))
            .route("/hello", get(inspect::hello))
            .route("/ls", get(listing::list_directory))
            .route("/", get(inspect::hello))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
