//! In-memory ModuleGraph implementation.
//!
//! Modules and edges live in hash maps behind an `Arc<RwLock<..>>`, so the
//! graph can be cloned cheaply and read from anywhere once it is loaded.

mod chains;
mod construction;
mod graph;
mod mutations;
mod queries;
mod statistics;

pub use graph::ModuleGraph;
pub(crate) use graph::GraphInner;
pub use statistics::GraphStatistics;
