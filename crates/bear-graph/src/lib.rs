//! # bear-graph
//!
//! Dependency graph primitives for the BEAR Apps module catalog.
//!
//! This crate models installed software modules (an application plus a
//! version) and the load-time dependency edges between them, and answers the
//! one question the Lmod hiding job needs: *does this module depend on that
//! toolchain, directly or transitively?*
//!
//! ## Overview
//!
//! - [`ModuleGraph`]: in-memory graph with forward and reverse edge maps and
//!   environment membership queries.
//! - [`DependencyResolver`]: memoized, cycle-safe reachability over one graph
//!   snapshot.
//! - [`hide`]: batch hide-list generation and the atomic hide-file writer.
//! - [`snapshot`]: the JSON export of the catalog that the graph is built from.
//!
//! ## Quick Start
//!
//! ```rust
//! use bear_graph::{DependencyResolver, Module, ModuleGraph, ModuleId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraph::new();
//! let gcc: ModuleId = "GCCcore/9.3.0".parse()?;
//! let zlib: ModuleId = "zlib/1.2.11".parse()?;
//!
//! graph.add_module(Module::new(gcc.clone()).with_link("live", "x86_64"))?;
//! graph.add_module(Module::new(zlib.clone()).with_link("live", "x86_64"))?;
//! graph.add_dependency(zlib.clone(), gcc.clone());
//!
//! let mut resolver = DependencyResolver::new(&graph);
//! assert!(resolver.depends_on(&zlib, &gcc));
//! assert!(!resolver.depends_on(&gcc, &zlib));
//! # Ok(())
//! # }
//! ```

pub mod dependency_chain;
pub mod hide;
pub mod module;
pub mod module_id;
pub mod resolver;
pub mod snapshot;

// In-memory ModuleGraph implementation
mod memory;

pub use memory::{GraphStatistics, ModuleGraph};

pub use dependency_chain::DependencyChain;
pub use hide::{
    HideError, HideFileNaming, HideList, HideListBuilder, HideOptions, HidePlan, HiddenModule,
    build_hide_lists, write_hide_file,
};
pub use module::{Module, ModuleLink};
pub use module_id::{ModuleId, ModuleIdError};
pub use resolver::DependencyResolver;
pub use snapshot::{CatalogSnapshot, LinkRecord, ModuleRef, SnapshotError, VersionRecord};

/// Error types for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A module with the same identity is already in the graph.
    #[error("duplicate module: {0}")]
    DuplicateModule(ModuleId),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
