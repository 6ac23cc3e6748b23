//! HTTP surface of the discovery service.
//!
//! A small axum router: the discovery endpoint behind basic auth, plus an
//! open liveness probe. All responses are JSON; failures carry a
//! `{status, error}` body.

pub mod auth;
pub mod error;
pub mod routes;

use crate::cloud::CloudClient;
use anyhow::{Context, Result};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::info;

/// State shared by every request: the platform client and the expected
/// basic-auth credentials.
pub struct AppState {
    pub client: Arc<dyn CloudClient>,
    pub auth_user: String,
    pub auth_pass: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/v1/discover/{root_id}", get(routes::discover))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ));

    Router::new()
        .route("/health", get(routes::health))
        .merge(protected)
        .with_state(state)
}

/// Binds `addr` and serves until ctrl-c.
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://{}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
