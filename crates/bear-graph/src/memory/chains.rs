//! Dependency chain analysis methods for ModuleGraph.

use super::graph::ModuleGraph;
use crate::ModuleId;
use crate::dependency_chain::{DependencyChain, find_cycles, shortest_chain};

impl ModuleGraph {
    /// Shortest chain of dependencies leading from `from` to `to`.
    ///
    /// Useful for explaining why a module is (or is not) hidden for a given
    /// toolchain.
    pub fn dependency_chain(&self, from: &ModuleId, to: &ModuleId) -> Option<DependencyChain> {
        shortest_chain(from, to, |module| self.dependencies(module))
    }

    /// Every dependency cycle reachable in the graph, one chain per back edge.
    ///
    /// Traversal starts from modules in id order, so output is stable.
    pub fn find_cycles(&self) -> Vec<DependencyChain> {
        let mut roots: Vec<ModuleId> = {
            let inner = self.inner.read();
            inner
                .modules
                .keys()
                .chain(inner.dependencies.keys())
                .cloned()
                .collect()
        };
        roots.sort();
        roots.dedup();

        find_cycles(&roots, |module| self.dependencies(module))
    }
}
