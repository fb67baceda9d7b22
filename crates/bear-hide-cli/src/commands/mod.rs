//! Command implementations.
//!
//! Each subcommand has an `execute` function taking its parsed arguments and
//! returning [`crate::Result`].

mod check;
mod generate;
mod why;

use std::path::Path;

use bear_graph::{CatalogSnapshot, ModuleGraph};
use tracing::debug;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
pub use why::execute as why_execute;

use crate::error::{CliError, Result};

/// Read a catalog snapshot and build its dependency graph.
pub(crate) fn load_graph(path: &Path) -> Result<ModuleGraph> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }

    let graph = CatalogSnapshot::from_path(path)?.into_graph()?;
    debug!(
        modules = graph.len(),
        edges = graph.edge_count(),
        "loaded snapshot {}",
        path.display()
    );
    Ok(graph)
}
