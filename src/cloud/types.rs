//! Wire types for the platform API.
//!
//! The v2 Cloud Controller API wraps list results in `{metadata, entity}`
//! envelopes; the trait surface in [`crate::cloud::client`] flattens those
//! into the small `*Ref` types the graph builder actually consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Application summary: name, space, exposed routes and bound services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSummary {
    #[serde(rename = "guid")]
    pub id: String,
    pub name: String,
    #[serde(rename = "space_guid")]
    pub space_id: String,
    #[serde(default)]
    pub routes: Vec<SummaryRoute>,
    #[serde(default)]
    pub services: Vec<SummaryService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRoute {
    #[serde(rename = "guid")]
    pub id: String,
    pub host: String,
    pub domain: DomainRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRef {
    pub name: String,
}

impl SummaryRoute {
    /// Fully qualified hostname of the route, `host.domain`.
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.host, self.domain.name)
    }
}

/// A service instance as it appears in an application summary. User-provided
/// instances carry no plan; that absence is what classifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryService {
    #[serde(rename = "guid")]
    pub id: String,
    pub name: String,
    #[serde(rename = "service_plan", default)]
    pub plan: Option<ServicePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePlan {
    pub name: String,
}

/// A route matched by hostname lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRef {
    pub id: String,
    pub host: String,
}

/// An application bound to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRef {
    pub id: String,
    pub name: String,
}

/// Free-form credentials of a user-provided service instance.
pub type Credentials = Map<String, Value>;

// v2 response envelopes, private to the REST client.

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceList<T> {
    #[serde(rename = "total_results", default)]
    pub total: usize,
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Resource<T> {
    pub metadata: ResourceMetadata,
    pub entity: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceMetadata {
    pub guid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteEntity {
    #[serde(default)]
    pub host: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppEntity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpsEntity {
    #[serde(default)]
    pub credentials: Credentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_decodes_cloud_controller_shape() {
        let body = r#"{
            "guid": "app-1",
            "name": "frontend",
            "space_guid": "space-1",
            "routes": [
                {"guid": "r-1", "host": "frontend", "domain": {"name": "example.com"}}
            ],
            "services": [
                {"guid": "s-1", "name": "db", "service_plan": {"name": "shared"}},
                {"guid": "s-2", "name": "config-holder"}
            ]
        }"#;
        let summary: AppSummary = serde_json::from_str(body).unwrap();

        assert_eq!(summary.space_id, "space-1");
        assert_eq!(summary.routes[0].fqdn(), "frontend.example.com");
        assert!(summary.services[0].plan.is_some());
        assert!(summary.services[1].plan.is_none());
    }

    #[test]
    fn test_summary_tolerates_missing_lists() {
        let summary: AppSummary = serde_json::from_str(
            r#"{"guid": "app-1", "name": "lonely", "space_guid": "space-1"}"#,
        )
        .unwrap();
        assert!(summary.routes.is_empty());
        assert!(summary.services.is_empty());
    }
}
