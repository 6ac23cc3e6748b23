#![allow(dead_code)]

//! Shared test support: an in-memory platform client with canned answers.

use async_trait::async_trait;
use serde_json::Value;
use stackgraph::cloud::types::{DomainRef, ServicePlan};
use stackgraph::cloud::{
    AppRef, AppSummary, CloudClient, CloudError, Credentials, RouteRef, SummaryRoute,
    SummaryService,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned platform state. Every accessor counts its calls so tests can
/// assert that a request never reached the platform.
#[derive(Default)]
pub struct MockCloud {
    apps: HashMap<String, AppSummary>,
    credentials: HashMap<String, Credentials>,
    routes: HashMap<(String, String), Vec<RouteRef>>,
    route_apps: HashMap<String, Vec<AppRef>>,
    failing_apps: HashSet<String>,
    calls: AtomicUsize,
}

impl MockCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(mut self, summary: AppSummary) -> Self {
        self.apps.insert(summary.id.clone(), summary);
        self
    }

    pub fn with_credentials(mut self, service_id: &str, entries: &[(&str, Value)]) -> Self {
        let mut credentials = Credentials::new();
        for (key, value) in entries {
            credentials.insert(key.to_string(), value.clone());
        }
        self.credentials.insert(service_id.to_string(), credentials);
        self
    }

    pub fn with_route(mut self, space_id: &str, host: &str, route_id: &str) -> Self {
        self.routes
            .entry((space_id.to_string(), host.to_string()))
            .or_default()
            .push(RouteRef {
                id: route_id.to_string(),
                host: host.to_string(),
            });
        self
    }

    pub fn with_bound_app(mut self, route_id: &str, app_id: &str, name: &str) -> Self {
        self.route_apps
            .entry(route_id.to_string())
            .or_default()
            .push(AppRef {
                id: app_id.to_string(),
                name: name.to_string(),
            });
        self
    }

    /// Makes summary fetches for `app_id` fail with an upstream error.
    pub fn with_failing_app(mut self, app_id: &str) -> Self {
        self.failing_apps.insert(app_id.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloudClient for MockCloud {
    async fn app_summary(&self, app_id: &str) -> Result<AppSummary, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_apps.contains(app_id) {
            return Err(CloudError::Api {
                status: 500,
                message: format!("summary fetch for {} failed", app_id),
            });
        }
        self.apps.get(app_id).cloned().ok_or_else(|| CloudError::Api {
            status: 404,
            message: format!("no such app {}", app_id),
        })
    }

    async fn user_provided_credentials(
        &self,
        service_id: &str,
    ) -> Result<Credentials, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.credentials.get(service_id).cloned().unwrap_or_default())
    }

    async fn routes_by_hostname(
        &self,
        space_id: &str,
        host: &str,
    ) -> Result<Vec<RouteRef>, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .routes
            .get(&(space_id.to_string(), host.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn apps_bound_to_route(&self, route_id: &str) -> Result<Vec<AppRef>, CloudError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.route_apps.get(route_id).cloned().unwrap_or_default())
    }
}

pub fn summary(id: &str, name: &str, space_id: &str) -> AppSummary {
    AppSummary {
        id: id.to_string(),
        name: name.to_string(),
        space_id: space_id.to_string(),
        routes: Vec::new(),
        services: Vec::new(),
    }
}

pub fn with_route(mut summary: AppSummary, id: &str, host: &str, domain: &str) -> AppSummary {
    summary.routes.push(SummaryRoute {
        id: id.to_string(),
        host: host.to_string(),
        domain: DomainRef {
            name: domain.to_string(),
        },
    });
    summary
}

pub fn with_service(mut summary: AppSummary, service: SummaryService) -> AppSummary {
    summary.services.push(service);
    summary
}

pub fn managed_service(id: &str, name: &str) -> SummaryService {
    SummaryService {
        id: id.to_string(),
        name: name.to_string(),
        plan: Some(ServicePlan {
            name: "shared".to_string(),
        }),
    }
}

pub fn user_provided_service(id: &str, name: &str) -> SummaryService {
    SummaryService {
        id: id.to_string(),
        name: name.to_string(),
        plan: None,
    }
}
