//! Memoized dependency reachability.
//!
//! [`DependencyResolver::depends_on`] answers whether one module requires
//! another, directly or through any chain of dependencies. Results are cached
//! per `(module, target)` pair for the lifetime of the resolver, which borrows
//! one graph snapshot: the graph cannot change while a resolver exists, so the
//! cache never goes stale.
//!
//! Catalog data may contain dependency cycles. Each top-level query threads a
//! visit map through the traversal; reaching a module that is still being
//! visited cuts that edge. A negative answer that relied on a cut edge is only
//! valid relative to the current query root, so it is kept out of the shared
//! cache.

use parking_lot::RwLockReadGuard;
use rustc_hash::FxHashMap as HashMap;
use tracing::trace;

use crate::ModuleGraph;
use crate::ModuleId;
use crate::memory::GraphInner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    Reachable,
    Unreachable,
    /// Unreachable unless through a module still on the traversal path.
    Provisional,
}

#[derive(Debug, Clone, Copy)]
enum VisitState {
    Visiting,
    Resolved(Reach),
}

#[derive(Debug, Default)]
struct Memo {
    entries: HashMap<(ModuleId, ModuleId), bool>,
    hits: usize,
}

impl Memo {
    fn get(&mut self, module: &ModuleId, target: &ModuleId) -> Option<bool> {
        // Tuple keys need owned ids for lookup.
        let hit = self
            .entries
            .get(&(module.clone(), target.clone()))
            .copied();
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }
}

/// Cached reachability queries over one [`ModuleGraph`] snapshot.
///
/// Holds a read lock on the graph for its whole lifetime.
pub struct DependencyResolver<'g> {
    graph: RwLockReadGuard<'g, GraphInner>,
    memo: Memo,
}

impl<'g> DependencyResolver<'g> {
    pub fn new(graph: &'g ModuleGraph) -> Self {
        Self {
            graph: graph.inner.read(),
            memo: Memo::default(),
        }
    }

    /// Does `module` depend on `target`, directly or transitively?
    ///
    /// Reflexive: a module always depends on itself. Modules without recorded
    /// dependencies, and targets absent from the graph, simply never match.
    pub fn depends_on(&mut self, module: &ModuleId, target: &ModuleId) -> bool {
        if module == target {
            return true;
        }
        if let Some(cached) = self.memo.get(module, target) {
            return cached;
        }

        let mut visits = HashMap::default();
        let reach = resolve(&self.graph, &mut self.memo, module, target, &mut visits);

        // Only the root can still be on the path here, so a provisional
        // answer is final for this pair.
        let found = reach == Reach::Reachable;
        self.memo
            .entries
            .insert((module.clone(), target.clone()), found);
        trace!(%module, %target, found, visited = visits.len(), "resolved dependency query");
        found
    }

    /// Number of cached `(module, target)` answers.
    pub fn cache_len(&self) -> usize {
        self.memo.entries.len()
    }

    /// Number of queries (including nested ones) answered from the cache.
    pub fn cache_hits(&self) -> usize {
        self.memo.hits
    }
}

fn resolve(
    graph: &GraphInner,
    memo: &mut Memo,
    module: &ModuleId,
    target: &ModuleId,
    visits: &mut HashMap<ModuleId, VisitState>,
) -> Reach {
    if module == target {
        return Reach::Reachable;
    }
    if let Some(cached) = memo.get(module, target) {
        return if cached {
            Reach::Reachable
        } else {
            Reach::Unreachable
        };
    }
    match visits.get(module) {
        Some(VisitState::Visiting) => return Reach::Provisional,
        Some(VisitState::Resolved(reach)) => return *reach,
        None => {}
    }

    visits.insert(module.clone(), VisitState::Visiting);

    let mut reach = Reach::Unreachable;
    for dep in graph.direct_dependencies(module) {
        if dep == target {
            reach = Reach::Reachable;
            break;
        }
        match resolve(graph, memo, dep, target, visits) {
            Reach::Reachable => {
                reach = Reach::Reachable;
                break;
            }
            Reach::Provisional => reach = Reach::Provisional,
            Reach::Unreachable => {}
        }
    }

    visits.insert(module.clone(), VisitState::Resolved(reach));
    if reach != Reach::Provisional {
        memo.entries
            .insert((module.clone(), target.clone()), reach == Reach::Reachable);
    }
    reach
}
