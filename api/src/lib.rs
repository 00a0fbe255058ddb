use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{Router, routing::post};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::{
        analyze::analyze_route::analyze_route, generate::generate_route::generate_route,
        sweep::sweep_route::sweep_route,
    },
};

/// Port used when neither `API_ADDRESS` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

/// All playground routes over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_route))
        .route("/api/sweep", post(sweep_route))
        .route("/api/analyze", post(analyze_route))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// `API_ADDRESS` as-is, else `0.0.0.0:{PORT}` with `PORT` defaulting to 3000.
pub fn bind_address<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(addr) = non_empty("API_ADDRESS") {
        return addr.trim().to_string();
    }
    let port = non_empty("PORT")
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("0.0.0.0:{port}")
}

/// Builds state from the environment and serves until Ctrl+C.
///
/// # Errors
/// - [`AppError::Config`] if the OpenAI client cannot be configured
/// - [`AppError::Bind`] if the address is unavailable
/// - [`AppError::Server`] if the server stops with an I/O error
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let addr = bind_address(|name| env::var(name).ok());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(%addr, "playground API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("playground API stopped");
    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
