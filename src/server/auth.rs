//! HTTP basic authentication for the discovery endpoint.

use super::error::error_response;
use super::AppState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

/// Rejects requests whose `Authorization` header does not carry the
/// configured basic-auth credentials.
pub async fn require_basic_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic);

    match provided {
        Some((user, pass)) if user == state.auth_user && pass == state.auth_pass => {
            next.run(request).await
        }
        _ => {
            let mut response = error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"stackgraph\""),
            );
            response
        }
    }
}

fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, pass) = text.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

#[cfg(test)]
mod tests {
    use super::decode_basic;

    #[test]
    fn test_decodes_user_and_password() {
        // "admin:secret"
        assert_eq!(
            decode_basic("Basic YWRtaW46c2VjcmV0"),
            Some(("admin".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_basic_schemes() {
        assert_eq!(decode_basic("Bearer abc"), None);
    }

    #[test]
    fn test_rejects_payload_without_separator() {
        // "adminsecret"
        assert_eq!(decode_basic("Basic YWRtaW5zZWNyZXQ="), None);
    }
}
