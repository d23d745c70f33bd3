//! JSON web API.
//!
//! Exposes search, team and player views, login, and credential-guarded
//! player administration over HTTP.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

#[cfg(test)]
mod tests;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/search", get(routes::search).post(routes::search))
        .route("/teams/{id}", get(routes::get_team))
        .route("/players/{id}", get(routes::get_player))
        .route("/login", post(routes::login))
        .route(
            "/admin/players",
            post(routes::add_player)
                .put(routes::update_player)
                .delete(routes::delete_player),
        )
        .route(
            "/admin/players/{id}",
            delete(routes::delete_player_by_id),
        )
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(state: AppState, config: ServerConfig) -> crate::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Starting nba-stats API on http://{}", addr);

    axum::serve(listener, build_router(state, config.timeout))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
