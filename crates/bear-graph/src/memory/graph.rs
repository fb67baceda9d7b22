//! ModuleGraph storage.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::{Module, ModuleId};

/// Shared, in-memory dependency graph of catalog modules.
///
/// Cloning a `ModuleGraph` clones the handle, not the data.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    pub(crate) inner: Arc<RwLock<GraphInner>>,
}

#[derive(Debug, Default)]
pub(crate) struct GraphInner {
    pub(crate) modules: HashMap<ModuleId, Arc<Module>>,
    /// Forward edges: module -> modules it requires at load time.
    pub(crate) dependencies: HashMap<ModuleId, HashSet<ModuleId>>,
    /// Reverse edges: module -> modules that require it.
    pub(crate) dependents: HashMap<ModuleId, HashSet<ModuleId>>,
}

impl GraphInner {
    /// Direct dependencies of `id`. Unknown modules have none.
    pub(crate) fn direct_dependencies<'a>(
        &'a self,
        id: &ModuleId,
    ) -> impl Iterator<Item = &'a ModuleId> + use<'a> {
        self.dependencies.get(id).into_iter().flatten()
    }
}
