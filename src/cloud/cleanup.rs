//! Deletion utilities over the platform API.
//!
//! These operations are independent of discovery: they share the REST
//! client and nothing else. Service instances are only removed when no
//! binding is left; route teardown fans out concurrently and the first
//! error wins.

use super::client::CloudError;
use super::http::CfRestClient;
use crate::graph::Component;
use futures_util::future::join_all;
use serde_json::Value;
use tracing::info;

impl CfRestClient {
    /// Deletes a managed service instance unless something is still bound
    /// to it.
    pub async fn delete_service_if_unbound(
        &self,
        component: &Component,
    ) -> Result<(), CloudError> {
        let bindings = self
            .list::<Value>(
                &format!("/v2/service_instances/{}/service_bindings", component.id),
                &[],
            )
            .await?;
        if bindings.total > 0 {
            info!(
                "service instance {} is bound to {} app(s), not deleting",
                component.name, bindings.total
            );
            return Ok(());
        }
        info!("deleting unbound service instance {}", component.name);
        self.delete(&format!("/v2/service_instances/{}", component.id), &[])
            .await
    }

    /// Deletes a user-provided service instance unless something is still
    /// bound to it.
    pub async fn delete_ups_if_unbound(&self, component: &Component) -> Result<(), CloudError> {
        let bindings = self
            .list::<Value>(
                &format!(
                    "/v2/user_provided_service_instances/{}/service_bindings",
                    component.id
                ),
                &[],
            )
            .await?;
        if bindings.total > 0 {
            info!(
                "user-provided instance {} is bound to {} app(s), not deleting",
                component.name, bindings.total
            );
            return Ok(());
        }
        info!("deleting unbound user-provided instance {}", component.name);
        self.delete(
            &format!("/v2/user_provided_service_instances/{}", component.id),
            &[],
        )
        .await
    }

    /// Unassociates and deletes every route of an application. Routes are
    /// torn down concurrently; the first failure is returned.
    pub async fn delete_routes(&self, app_id: &str) -> Result<(), CloudError> {
        use super::client::CloudClient;

        let summary = self.app_summary(app_id).await?;
        let teardowns = summary.routes.iter().map(|route| async move {
            self.delete(&format!("/v2/apps/{}/routes/{}", app_id, route.id), &[])
                .await?;
            self.delete(&format!("/v2/routes/{}", route.id), &[]).await
        });
        join_all(teardowns)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    pub async fn delete_application(&self, app_id: &str) -> Result<(), CloudError> {
        self.delete(&format!("/v2/apps/{}", app_id), &[]).await
    }

    /// Purges a service offering: removes its plans first, then the service
    /// itself, bypassing broker interaction.
    pub async fn purge_service(
        &self,
        service_id: &str,
        service_name: &str,
        service_plans_path: &str,
    ) -> Result<(), CloudError> {
        let plans = self.list::<Value>(service_plans_path, &[]).await?;
        for plan in &plans.resources {
            self.delete(&format!("/v2/service_plans/{}", plan.metadata.guid), &[])
                .await?;
        }
        info!("purging service {}", service_name);
        self.delete(
            &format!("/v2/services/{}", service_id),
            &[("purge", "true".to_string())],
        )
        .await
    }
}
