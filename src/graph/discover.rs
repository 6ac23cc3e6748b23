//! Discovery orchestration.
//!
//! `discover` is the single externally visible operation: fetch the root
//! summary, build the graph, reject cycles, and hand back every reachable
//! component in dependency-first order. The graph and its node registry are
//! owned by the call and dropped when it returns; nothing is shared between
//! invocations.

use super::builder::{GraphBuilder, MAX_DISCOVERY_DEPTH};
use super::component::{Component, ComponentKind};
use super::cycles;
use super::model::DependencyGraph;
use super::order;
use crate::cloud::client::{CloudClient, CloudError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A platform fetch failed; the discovery aborts with no result.
    #[error("upstream platform request failed: {0}")]
    Upstream(#[from] CloudError),

    /// The finished graph contains a cycle; there is no partial-success
    /// mode.
    #[error("dependency graph has cycles and the stack cannot be ordered")]
    CyclicDependency,

    /// Expansion nested deeper than [`MAX_DISCOVERY_DEPTH`] applications.
    #[error("discovery exceeded the depth limit of {MAX_DISCOVERY_DEPTH} nested applications")]
    DepthLimitExceeded,
}

/// Discovers every component the root application transitively depends on
/// and returns them dependency-first: each component precedes everything
/// that depends on it.
pub async fn discover(
    client: &dyn CloudClient,
    root_id: &str,
) -> Result<Vec<Component>, DiscoveryError> {
    let root_summary = client.app_summary(root_id).await?;

    let mut graph = DependencyGraph::new();
    graph.upsert(root_id, &root_summary.name, ComponentKind::Application, None);

    let builder = GraphBuilder::new(client);
    builder.expand(&mut graph, root_id.to_string(), 0).await?;

    if cycles::has_cycle(&graph) {
        return Err(DiscoveryError::CyclicDependency);
    }
    info!("graph of {} component(s) has no cycles", graph.len());

    Ok(order::dependency_first_order(&graph))
}
