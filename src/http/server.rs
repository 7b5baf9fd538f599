//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop on the shutdown signal

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::analyzer::{AnalyzerClient, AnalyzerError};
use crate::config::UiConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::session::SessionStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub analyzer: AnalyzerClient,
}

/// HTTP server for the UI API.
pub struct HttpServer {
    router: Router,
    sessions: SessionStore,
    config: UiConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: UiConfig) -> Result<Self, AnalyzerError> {
        let sessions = SessionStore::new(&config.sessions);
        let state = AppState {
            sessions: sessions.clone(),
            analyzer: AnalyzerClient::new(&config.analyzer)?,
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            sessions,
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &UiConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::get_status))
            .route("/ui/api/sessions", post(handlers::create_session))
            .route(
                "/ui/api/sessions/{id}",
                get(handlers::get_session).delete(handlers::delete_session),
            )
            .route("/ui/api/sessions/{id}/analyze", post(handlers::reanalyze))
            .route("/ui/api/sessions/{id}/toggle", post(handlers::toggle))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(set_request_id_layer())
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            analyzer = %self.config.analyzer.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving the API without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the session store shared with the handlers.
    pub fn sessions(&self) -> SessionStore {
        self.sessions.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &UiConfig {
        &self.config
    }
}
