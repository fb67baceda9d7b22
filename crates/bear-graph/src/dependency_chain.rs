//! Dependency chain analysis for explaining module relationships.
//!
//! A chain is one concrete path through the dependency graph. It answers
//! "why does this module require that toolchain?" and describes cycles found
//! in catalog data.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};

use crate::ModuleId;

/// A path of modules, each requiring the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyChain {
    /// The path of module IDs from the requiring module to the required one
    pub path: Vec<ModuleId>,
    /// Depth of this chain (path length - 1)
    pub depth: usize,
}

impl DependencyChain {
    /// Create a new dependency chain from a path.
    pub fn new(path: Vec<ModuleId>) -> Self {
        let depth = path.len().saturating_sub(1);
        Self { path, depth }
    }

    /// First module in the chain.
    pub fn source(&self) -> Option<&ModuleId> {
        self.path.first()
    }

    /// Last module in the chain.
    pub fn target(&self) -> Option<&ModuleId> {
        self.path.last()
    }

    /// Check if this chain contains a cycle (same module appears twice).
    pub fn has_cycle(&self) -> bool {
        let mut seen = HashSet::default();
        self.path.iter().any(|module| !seen.insert(module))
    }

    /// Format the chain as a human-readable string.
    ///
    /// Example: "Perl/5.30.2 -> zlib/1.2.11 -> GCCcore/9.3.0"
    pub fn format_chain(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Shortest chain from `from` to `to` by breadth-first search.
///
/// `from == to` yields a single-module chain. Returns `None` when `to` is not
/// reachable.
pub(crate) fn shortest_chain<F>(
    from: &ModuleId,
    to: &ModuleId,
    mut get_dependencies: F,
) -> Option<DependencyChain>
where
    F: FnMut(&ModuleId) -> Vec<ModuleId>,
{
    if from == to {
        return Some(DependencyChain::new(vec![from.clone()]));
    }

    // child -> parent it was first reached from
    let mut parents: HashMap<ModuleId, ModuleId> = HashMap::default();
    let mut queue = VecDeque::from([from.clone()]);
    let mut seen = HashSet::default();
    seen.insert(from.clone());

    while let Some(current) = queue.pop_front() {
        for dep in get_dependencies(&current) {
            if !seen.insert(dep.clone()) {
                continue;
            }
            parents.insert(dep.clone(), current.clone());
            if &dep == to {
                let mut path = vec![dep];
                while let Some(parent) = parents.get(path.last()?) {
                    path.push(parent.clone());
                }
                path.reverse();
                return Some(DependencyChain::new(path));
            }
            queue.push_back(dep);
        }
    }

    None
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnStack,
    Done,
}

/// Find dependency cycles by depth-first search.
///
/// Every back edge yields one closed chain (first and last module equal).
/// Output order follows the order of `nodes` and of `get_dependencies`.
pub(crate) fn find_cycles<F>(nodes: &[ModuleId], mut get_dependencies: F) -> Vec<DependencyChain>
where
    F: FnMut(&ModuleId) -> Vec<ModuleId>,
{
    fn visit<F>(
        node: &ModuleId,
        get_dependencies: &mut F,
        marks: &mut HashMap<ModuleId, Mark>,
        stack: &mut Vec<ModuleId>,
        cycles: &mut Vec<DependencyChain>,
    ) where
        F: FnMut(&ModuleId) -> Vec<ModuleId>,
    {
        marks.insert(node.clone(), Mark::OnStack);
        stack.push(node.clone());

        for dep in get_dependencies(node) {
            match marks.get(&dep) {
                Some(Mark::OnStack) => {
                    if let Some(start) = stack.iter().position(|m| m == &dep) {
                        let mut path = stack[start..].to_vec();
                        path.push(dep);
                        cycles.push(DependencyChain::new(path));
                    }
                }
                Some(Mark::Done) => {}
                None => visit(&dep, get_dependencies, marks, stack, cycles),
            }
        }

        stack.pop();
        marks.insert(node.clone(), Mark::Done);
    }

    let mut marks = HashMap::default();
    let mut stack = Vec::new();
    let mut cycles = Vec::new();

    for node in nodes {
        if !marks.contains_key(node) {
            visit(node, &mut get_dependencies, &mut marks, &mut stack, &mut cycles);
        }
    }

    cycles
}
