//! Mutation methods for ModuleGraph.

use std::sync::Arc;

use super::graph::ModuleGraph;
use crate::{Error, Module, ModuleId, Result};

impl ModuleGraph {
    /// Add a module into the graph.
    ///
    /// Returns [`Error::DuplicateModule`] if a module with the same id exists.
    pub fn add_module(&self, module: Module) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.modules.contains_key(&module.id) {
            return Err(Error::DuplicateModule(module.id));
        }
        inner.modules.insert(module.id.clone(), Arc::new(module));
        Ok(())
    }

    /// Add a dependency edge, creating forward and reverse mappings.
    ///
    /// Neither endpoint has to be a known module.
    pub fn add_dependency(&self, from: ModuleId, to: ModuleId) {
        let mut inner = self.inner.write();

        // HashSet keeps edges unique
        inner
            .dependencies
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        inner.dependents.entry(to).or_default().insert(from);
    }

    /// Add multiple dependencies from a single module.
    pub fn add_dependencies<I>(&self, from: ModuleId, targets: I)
    where
        I: IntoIterator<Item = ModuleId>,
    {
        for target in targets {
            self.add_dependency(from.clone(), target);
        }
    }
}
