//! Platform data client contract.
//!
//! [`CloudClient`] is the seam between the discovery engine and the
//! platform: everything the graph builder learns about applications,
//! bindings and routes flows through these four operations. There is no
//! retry policy; any error aborts the in-progress discovery and surfaces to
//! the caller unchanged.

use super::types::{AppRef, AppSummary, Credentials, RouteRef};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to the platform API.
#[derive(Debug, Error)]
pub enum CloudError {
    /// Transport-level failure: connection refused, timeout, TLS, etc.
    #[error("platform API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("platform API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode platform API response: {0}")]
    InvalidResponse(String),
}

/// Read-only platform operations the discovery engine depends on.
#[async_trait]
pub trait CloudClient: Send + Sync {
    /// Summary of an application: name, space, routes, bound services.
    async fn app_summary(&self, app_id: &str) -> Result<AppSummary, CloudError>;

    /// Free-form credentials of a user-provided service instance.
    async fn user_provided_credentials(
        &self,
        service_id: &str,
    ) -> Result<Credentials, CloudError>;

    /// Routes in a space whose host matches `host` exactly.
    async fn routes_by_hostname(
        &self,
        space_id: &str,
        host: &str,
    ) -> Result<Vec<RouteRef>, CloudError>;

    /// Applications bound to the given route.
    async fn apps_bound_to_route(&self, route_id: &str) -> Result<Vec<AppRef>, CloudError>;
}
