//! Beacon Server - HTTP API introspection endpoint
//!
//! This crate provides the web backend:
//! - `GET /` index describing the API version and its paths
//! - Request tracing and panic recovery middleware
//! - Graceful shutdown on Ctrl+C / SIGTERM

pub mod response;
pub mod routes;

use anyhow::Context;
use axum::{routing::get, Router};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use response::{ApiSuccess, API_VERSION};
pub use routes::index::{MethodsPayload, StatusResponse, INDEX_PATH, METHODS};

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Create the router with all routes
pub fn create_router() -> Router {
    apply_middleware(Router::new().route(INDEX_PATH, get(routes::index::index_handler)))
}

/// Wrap a router in request tracing and panic recovery
pub fn apply_middleware(router: Router) -> Router {
    router
        // Outermost layer last: panics are caught inside the trace span
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let router = create_router();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Beacon server listening on http://{}", listener.local_addr()?);
    tracing::info!(version = API_VERSION, "Serving index at {}", INDEX_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves once the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::warn!("Received SIGTERM, shutting down gracefully"),
    }
}
