//! JSON error body shared by every failing response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
}

/// Builds a `{status, error}` response and logs the message, mirroring the
/// status code in the body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    error!("{}", message);
    (
        status,
        Json(ErrorBody {
            status: status.as_u16(),
            error: message,
        }),
    )
        .into_response()
}
