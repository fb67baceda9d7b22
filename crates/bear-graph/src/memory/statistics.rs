//! Statistics methods for ModuleGraph.

use serde::{Deserialize, Serialize};

use super::graph::ModuleGraph;

/// Summary counts for a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub module_count: usize,
    pub edge_count: usize,
    /// Edge targets that are not modules in the graph.
    pub unknown_dependency_count: usize,
    /// Modules without any dependency edge.
    pub leaf_count: usize,
    pub environment_count: usize,
}

impl ModuleGraph {
    pub fn statistics(&self) -> GraphStatistics {
        let environment_count = self.environments().len();
        let inner = self.inner.read();

        let unknown_dependency_count = inner
            .dependents
            .keys()
            .filter(|id| !inner.modules.contains_key(*id))
            .count();

        let leaf_count = inner
            .modules
            .keys()
            .filter(|id| inner.dependencies.get(*id).is_none_or(|deps| deps.is_empty()))
            .count();

        GraphStatistics {
            module_count: inner.modules.len(),
            edge_count: inner.dependencies.values().map(|d| d.len()).sum(),
            unknown_dependency_count,
            leaf_count,
            environment_count,
        }
    }
}
