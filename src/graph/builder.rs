//! Recursive expansion of an application's bindings into graph nodes.
//!
//! Managed services are leaves. User-provided services may hide an
//! application-to-application dependency behind a `url` credential; reverse
//! resolution turns that URL back into a concrete application by matching
//! its host against the routes of the same space, then confirms the match
//! against the candidate's own routes before recursing into it. Any step of
//! reverse resolution that fails to confirm simply truncates the branch;
//! that is normal control flow, not an error.

use super::cycles;
use super::component::ComponentKind;
use super::discover::DiscoveryError;
use super::model::DependencyGraph;
use crate::cloud::client::CloudClient;
use crate::cloud::types::AppRef;
use futures_util::future::BoxFuture;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Hard ceiling on nested application expansion. The eager cycle check
/// already stops cyclic UPS chains; this bounds pathological acyclic depth.
pub const MAX_DISCOVERY_DEPTH: usize = 64;

pub struct GraphBuilder<'a> {
    client: &'a dyn CloudClient,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(client: &'a dyn CloudClient) -> Self {
        Self { client }
    }

    /// Expands the bindings of `app_id`, whose node must already exist in
    /// `graph`, recursing into applications reached through user-provided
    /// service URLs.
    pub fn expand<'g>(
        &'g self,
        graph: &'g mut DependencyGraph,
        app_id: String,
        depth: usize,
    ) -> BoxFuture<'g, Result<(), DiscoveryError>> {
        Box::pin(async move {
            if depth > MAX_DISCOVERY_DEPTH {
                return Err(DiscoveryError::DepthLimitExceeded);
            }

            debug!("expanding dependencies of application {}", app_id);
            let summary = self.client.app_summary(&app_id).await?;

            for service in &summary.services {
                if service.plan.is_some() {
                    graph.upsert(
                        &service.id,
                        &service.name,
                        ComponentKind::ManagedService,
                        Some(&app_id),
                    );
                    graph.link(&app_id, &service.id);
                    continue;
                }

                graph.upsert(
                    &service.id,
                    &service.name,
                    ComponentKind::UserProvidedService,
                    Some(&app_id),
                );
                graph.link(&app_id, &service.id);

                let credentials = self.client.user_provided_credentials(&service.id).await?;
                let url = match credentials.get("url") {
                    Some(Value::String(url)) => url.clone(),
                    _ => continue,
                };

                let target = match self.resolve_app_by_url(&summary.space_id, &url).await? {
                    Some(target) => target,
                    None => continue,
                };

                info!(
                    "application {} is bound through user-provided service {}",
                    target.id, service.name
                );
                graph.upsert(&target.id, &target.name, ComponentKind::Application, Some(&service.id));
                graph.link(&service.id, &target.id);

                if cycles::has_cycle(graph) {
                    warn!("graph gained a cycle, stopping traversal of this branch");
                    break;
                }
                self.expand(graph, target.id, depth + 1).await?;
            }
            Ok(())
        })
    }

    /// Reverse resolution: finds the application in `space_id` that serves
    /// `url`, or `None` when no confident match exists.
    async fn resolve_app_by_url(
        &self,
        space_id: &str,
        url: &str,
    ) -> Result<Option<AppRef>, DiscoveryError> {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => {
                debug!("[{}] is not a parseable URL, no hidden dependency", url);
                return Ok(None);
            }
        };
        let host = match parsed.host_str() {
            Some(host) => host,
            None => return Ok(None),
        };

        // Route hosts are bare labels; the first subdomain label of the URL
        // is the candidate.
        let label = host.split('.').next().unwrap_or_default();
        if label.is_empty() {
            return Ok(None);
        }

        let routes = self.client.routes_by_hostname(space_id, label).await?;
        let route = match routes.first() {
            Some(route) => route,
            None => {
                debug!("no routes found for host {}", host);
                return Ok(None);
            }
        };

        let apps = self.client.apps_bound_to_route(&route.id).await?;
        let candidate = match apps.first() {
            Some(app) => app,
            None => {
                debug!("no apps bound to route {}", route.id);
                return Ok(None);
            }
        };

        if !self.app_serves_host(&candidate.id, host).await? {
            debug!(
                "routes of candidate {} do not reconstruct {}, discarding match",
                candidate.id, url
            );
            return Ok(None);
        }
        Ok(Some(candidate.clone()))
    }

    /// Confirms that one of the application's own routes reconstructs the
    /// URL host. Guards against an unrelated app sharing the route label.
    async fn app_serves_host(&self, app_id: &str, host: &str) -> Result<bool, DiscoveryError> {
        let summary = self.client.app_summary(app_id).await?;
        Ok(summary.routes.iter().any(|route| route.fqdn() == host))
    }
}
