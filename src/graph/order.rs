//! Dependency-first ordering of a finished graph.
//!
//! Kahn's algorithm over the consumer -> dependency edge set yields an order
//! that lists consumers before the things they depend on; reversing it gives
//! the dependency-first sequence callers want, where every component
//! precedes everything that (transitively) depends on it. Ties between
//! unconstrained nodes are broken by component id so the output is
//! deterministic.

use super::component::Component;
use super::model::DependencyGraph;
use std::collections::{BTreeSet, HashMap};

/// Computes the dependency-first linearization of an acyclic graph.
///
/// The caller is responsible for rejecting cyclic graphs first; nodes caught
/// in a cycle would be silently absent from the result.
pub fn dependency_first_order(graph: &DependencyGraph) -> Vec<Component> {
    let mut in_degree: HashMap<&str, usize> = graph.node_ids().map(|id| (id, 0)).collect();
    for id in graph.node_ids() {
        for dep in graph.neighbors(id) {
            *in_degree.entry(dep.as_str()).or_insert(0) += 1;
        }
    }

    // Nodes nothing depends on come out first; the reversal below puts them
    // last, after everything they consume.
    let mut ready: BTreeSet<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| *id)
        .collect();

    let mut sorted: Vec<&str> = Vec::with_capacity(graph.len());
    while let Some(id) = ready.pop_first() {
        sorted.push(id);
        for dep in graph.neighbors(id) {
            if let Some(degree) = in_degree.get_mut(dep.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(dep.as_str());
                }
            }
        }
    }

    sorted
        .iter()
        .rev()
        .filter_map(|id| graph.node(id).cloned())
        .collect()
}
