//! REST implementation of the platform client.
//!
//! Talks to a Cloud Foundry style v2 API with bearer-token authentication.
//! One pooled `reqwest::Client` is shared across requests; the struct is
//! thread-safe and can sit behind an `Arc` while several discoveries run in
//! parallel.

use super::client::{CloudClient, CloudError};
use super::types::{
    AppEntity, AppRef, AppSummary, Credentials, Resource, ResourceList, RouteEntity, RouteRef,
    UpsEntity,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default request timeout for platform API calls.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bearer-token REST client for the platform API.
pub struct CfRestClient {
    /// API endpoint, e.g. "https://api.example.com".
    api_url: String,

    /// OAuth bearer token presented on every request.
    token: String,

    /// Shared HTTP client with connection pooling.
    http: Client,
}

impl CfRestClient {
    /// Creates a client with the default request timeout.
    pub fn new(api_url: String, token: String) -> Self {
        Self::with_timeout(api_url, token, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom per-request timeout.
    pub fn with_timeout(api_url: String, token: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CloudError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CloudError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        serde_json::from_str(&body)
            .map_err(|e| CloudError::InvalidResponse(format!("{} from {}", e, url)))
    }

    pub(crate) async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<(), CloudError> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CloudError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(())
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ResourceList<T>, CloudError> {
        self.get_json(path, query).await
    }
}

#[async_trait]
impl CloudClient for CfRestClient {
    async fn app_summary(&self, app_id: &str) -> Result<AppSummary, CloudError> {
        self.get_json(&format!("/v2/apps/{}/summary", app_id), &[])
            .await
    }

    async fn user_provided_credentials(
        &self,
        service_id: &str,
    ) -> Result<Credentials, CloudError> {
        let instance: Resource<UpsEntity> = self
            .get_json(
                &format!("/v2/user_provided_service_instances/{}", service_id),
                &[],
            )
            .await?;
        Ok(instance.entity.credentials)
    }

    async fn routes_by_hostname(
        &self,
        space_id: &str,
        host: &str,
    ) -> Result<Vec<RouteRef>, CloudError> {
        let list: ResourceList<RouteEntity> = self
            .list(
                &format!("/v2/spaces/{}/routes", space_id),
                &[("q", format!("host:{}", host))],
            )
            .await?;
        debug!("{} route(s) retrieved for host {}", list.total, host);
        Ok(list
            .resources
            .into_iter()
            .map(|r| RouteRef {
                id: r.metadata.guid,
                host: r.entity.host,
            })
            .collect())
    }

    async fn apps_bound_to_route(&self, route_id: &str) -> Result<Vec<AppRef>, CloudError> {
        let list: ResourceList<AppEntity> = self
            .list(&format!("/v2/routes/{}/apps", route_id), &[])
            .await?;
        Ok(list
            .resources
            .into_iter()
            .map(|r| AppRef {
                id: r.metadata.guid,
                name: r.entity.name,
            })
            .collect())
    }
}
