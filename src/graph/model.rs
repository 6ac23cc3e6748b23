//! Graph arena owned by a single discovery call.
//!
//! Components are stored in a map keyed by platform identifier and edges as
//! identifier-to-identifier adjacency lists, directed from a dependent
//! component to the component it depends on (consumer -> dependency). The
//! arena doubles as the node registry: re-reaching an identifier reuses the
//! existing node and extends its `dependent_of` set instead of inserting a
//! duplicate.

use super::component::{Component, ComponentKind};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DependencyGraph {
    nodes: HashMap<String, Component>,
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node for `id`, or reuses the existing one. In both cases
    /// `dependent` (when present) is added to the node's `dependent_of` set.
    /// The first insertion wins for name and kind.
    pub fn upsert(
        &mut self,
        id: &str,
        name: &str,
        kind: ComponentKind,
        dependent: Option<&str>,
    ) {
        let node = self
            .nodes
            .entry(id.to_string())
            .or_insert_with(|| Component::new(id, name, kind));
        if let Some(dependent) = dependent {
            node.dependent_of.insert(dependent.to_string());
        }
    }

    /// Records a consumer -> dependency edge. Duplicate edges are ignored.
    pub fn link(&mut self, from: &str, to: &str) {
        let targets = self.edges.entry(from.to_string()).or_default();
        if !targets.iter().any(|t| t == to) {
            targets.push(to.to_string());
        }
    }

    pub fn node(&self, id: &str) -> Option<&Component> {
        self.nodes.get(id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Dependencies of `id`, i.e. targets of its outgoing edges.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
