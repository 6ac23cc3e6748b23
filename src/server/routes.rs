//! Request handlers.

use super::error::error_response;
use super::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// `GET /v1/discover/{root_id}`: discovers the dependency stack of the
/// given root application and returns its components in dependency-first
/// order.
pub async fn discover(
    State(state): State<Arc<AppState>>,
    Path(root_id): Path<String>,
) -> Response {
    let root_id = root_id.trim();
    if root_id.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No root application id provided");
    }

    match crate::graph::discover(state.client.as_ref(), root_id).await {
        Ok(components) => {
            debug!("discovered {} component(s) for {}", components.len(), root_id);
            (StatusCode::OK, Json(components)).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// `GET /health`: unauthenticated liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
