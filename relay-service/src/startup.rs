//! Application startup and lifecycle management.
//!
//! Builds the shared state, assembles the HTTP router (relay endpoints,
//! probes, metrics and the static frontend) and runs the server.

use crate::config::RelayConfig;
use crate::handlers::{chat, health_check, image, metrics, readiness_check};
use crate::services::{GenerativeProvider, OpenAiProvider};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub provider: Arc<dyn GenerativeProvider>,
}

impl AppState {
    pub fn new(config: RelayConfig, provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}

/// Build the HTTP router. Paths without a route are served from the static
/// frontend directory.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.frontend.static_dir);
    let body_limit = state.config.frontend.body_limit_bytes;

    Router::new()
        .route("/chat", post(chat))
        .route("/image", post(image))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the OpenAI provider.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = OpenAiProvider::new(config.openai.clone()).map_err(|e| {
            tracing::error!("Failed to initialize OpenAI provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!("OpenAI provider: {}", e))
        })?;

        if !config.has_api_key() {
            tracing::warn!("OPENAI_API_KEY is not set; provider calls will be rejected");
        }

        tracing::info!(
            base_url = %config.openai.base_url,
            chat_model = %config.models.chat_model,
            image_model = %config.models.image_model,
            "Initialized OpenAI provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an existing provider.
    pub async fn build_with_provider(
        config: RelayConfig,
        provider: Arc<dyn GenerativeProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            static_dir = %config.frontend.static_dir.display(),
            "Relay service: HTTP on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
