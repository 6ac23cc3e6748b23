//! Cycle detection via strongly connected components.
//!
//! Tarjan's algorithm over the current edge set. Any strongly connected
//! component with more than one member is a cycle; a lone node without a
//! self-loop never is. The builder runs this eagerly after every
//! reverse-resolution edge, and the orchestrator once more after
//! construction completes.

use super::model::DependencyGraph;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Returns true when the graph contains at least one cycle.
pub fn has_cycle(graph: &DependencyGraph) -> bool {
    let mut tarjan = Tarjan {
        graph,
        next_index: 0,
        indices: HashMap::new(),
        lowlink: HashMap::new(),
        stack: Vec::new(),
        on_stack: HashSet::new(),
        cycle: false,
    };
    for id in graph.node_ids() {
        if !tarjan.indices.contains_key(id) {
            tarjan.strongconnect(id);
        }
        if tarjan.cycle {
            return true;
        }
    }
    false
}

struct Tarjan<'g> {
    graph: &'g DependencyGraph,
    next_index: usize,
    indices: HashMap<&'g str, usize>,
    lowlink: HashMap<&'g str, usize>,
    stack: Vec<&'g str>,
    on_stack: HashSet<&'g str>,
    cycle: bool,
}

impl<'g> Tarjan<'g> {
    fn strongconnect(&mut self, v: &'g str) {
        self.indices.insert(v, self.next_index);
        self.lowlink.insert(v, self.next_index);
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack.insert(v);

        let neighbors = self.graph.neighbors(v);
        for w in neighbors {
            let w = w.as_str();
            if !self.indices.contains_key(w) {
                self.strongconnect(w);
                let low = self.lowlink[w].min(self.lowlink[v]);
                self.lowlink.insert(v, low);
            } else if self.on_stack.contains(w) {
                let low = self.indices[w].min(self.lowlink[v]);
                self.lowlink.insert(v, low);
            }
        }

        if self.lowlink[v] == self.indices[v] {
            let mut size = 0;
            while let Some(w) = self.stack.pop() {
                self.on_stack.remove(w);
                size += 1;
                if w == v {
                    break;
                }
            }
            if size > 1 {
                warn!("dependency cycle of length {} detected", size);
                self.cycle = true;
            }
        }
    }
}
