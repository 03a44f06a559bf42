//! Catalog API Server
//!
//! HTTP server exposing the service catalog over axum. Self-contained: the
//! catalog is injected at construction, so tests can run the router against
//! an alternate catalog without touching process-wide state.

mod error;
mod handlers;
pub mod logging_middleware;

pub use error::ApiError;
pub use handlers::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use konqer_core::{branding, ServiceCatalog};

/// Catalog API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: branding::DEFAULT_BIND_HOST.to_string(),
            port: branding::DEFAULT_API_PORT,
            enable_cors: true,
        }
    }
}

impl ApiConfig {
    /// Build a config from the environment (`HOST`, `PORT`)
    ///
    /// Unset variables fall back to defaults; a `PORT` that does not parse
    /// as a TCP port is a startup error, not a silent fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid PORT value: {port}"))?;
        }
        Ok(config)
    }

    /// Get the socket address
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

/// Catalog API Server
///
/// Owns the immutable catalog and the transport configuration. The catalog
/// is shared read-only with every handler; no locking is needed because no
/// write path exists after construction.
pub struct ApiServer {
    config: ApiConfig,
    catalog: Arc<ServiceCatalog>,
}

impl ApiServer {
    /// Create a new server around an explicitly constructed catalog
    pub fn new(config: ApiConfig, catalog: ServiceCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Build the axum router
    ///
    /// Public so integration tests can drive the full HTTP surface without
    /// binding a socket.
    pub fn router(&self) -> Router {
        let app_state = AppState {
            catalog: self.catalog.clone(),
        };

        let mut router = Router::new()
            .route("/health", get(handlers::health))
            .route("/version", get(handlers::version))
            .route("/services", get(handlers::list_services))
            .route("/services/{slug}", get(handlers::get_service))
            .with_state(app_state)
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(
                logging_middleware::http_logging_middleware,
            ));

        // The catalog is public read-only data; CORS is wide open when enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// Binds, logs a ready message, then serves with graceful shutdown:
    /// on SIGINT/SIGTERM the listener stops accepting and in-flight
    /// requests are drained before exit.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.addr()?;

        info!(
            "[API] Starting {} v{} on {}",
            branding::API_NAME,
            env!("CARGO_PKG_VERSION"),
            addr
        );
        info!(
            "[API] Catalog loaded: {} services",
            self.catalog.len()
        );
        info!(
            "[API] CORS: {}",
            if self.config.enable_cors {
                "enabled"
            } else {
                "disabled"
            }
        );

        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("[API] Listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("[API] Shutdown complete");

        Ok(())
    }

    /// Start the server in the background
    ///
    /// Returns a JoinHandle that can be used to wait for completion or abort.
    pub fn spawn(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}

/// Resolves once SIGINT or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("[API] Shutdown signal received, draining in-flight requests");
}
