//! Query methods for ModuleGraph.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::graph::ModuleGraph;
use crate::{Module, ModuleId};

impl ModuleGraph {
    /// Retrieve a module by id.
    pub fn module(&self, id: &ModuleId) -> Option<Arc<Module>> {
        self.inner.read().modules.get(id).cloned()
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.inner.read().modules.contains_key(id)
    }

    /// True for modules in the graph and for dependency targets missing from
    /// it. The latter have no dependencies of their own.
    pub fn is_known(&self, id: &ModuleId) -> bool {
        let inner = self.inner.read();
        inner.modules.contains_key(id) || inner.dependents.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().modules.is_empty()
    }

    /// Number of distinct dependency edges.
    pub fn edge_count(&self) -> usize {
        self.inner
            .read()
            .dependencies
            .values()
            .map(|deps| deps.len())
            .sum()
    }

    /// Direct dependencies of a module, sorted case-insensitively by
    /// application name, then by version.
    pub fn dependencies(&self, id: &ModuleId) -> Vec<ModuleId> {
        let inner = self.inner.read();
        sorted_by_application(inner.direct_dependencies(id).cloned().collect())
    }

    /// Modules that directly require `id`, sorted like [`Self::dependencies`].
    pub fn dependents(&self, id: &ModuleId) -> Vec<ModuleId> {
        let inner = self.inner.read();
        let dependents = inner
            .dependents
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        sorted_by_application(dependents)
    }

    /// Modules installed in `environment`, ordered by application name and
    /// then version. A module linked for several architectures appears once.
    pub fn installed_in(&self, environment: &str) -> Vec<Arc<Module>> {
        let mut installed: Vec<Arc<Module>> = self
            .inner
            .read()
            .modules
            .values()
            .filter(|m| m.is_installed_in(environment))
            .cloned()
            .collect();
        installed.sort_by(|a, b| a.id.cmp(&b.id));
        installed
    }

    /// Versions of `application` installed in `environment`, ordered by version.
    pub fn installed_versions(&self, application: &str, environment: &str) -> Vec<Arc<Module>> {
        let mut versions: Vec<Arc<Module>> = self
            .inner
            .read()
            .modules
            .values()
            .filter(|m| m.id.application() == application && m.is_installed_in(environment))
            .cloned()
            .collect();
        versions.sort_by(|a, b| a.id.version().cmp(b.id.version()));
        versions
    }

    /// Every environment name that appears in a module link, sorted.
    pub fn environments(&self) -> Vec<String> {
        let inner = self.inner.read();
        let names: BTreeSet<&str> = inner
            .modules
            .values()
            .flat_map(|m| m.links.iter().map(|l| l.environment.as_str()))
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

fn sorted_by_application(mut ids: Vec<ModuleId>) -> Vec<ModuleId> {
    ids.sort_by_cached_key(|id| (id.application().to_lowercase(), id.clone()));
    ids
}
