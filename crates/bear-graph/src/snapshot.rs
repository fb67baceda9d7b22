//! JSON export of the catalog, and its conversion into a [`ModuleGraph`].
//!
//! The catalog database is not read directly. An export lists every version
//! with its load string, its direct dependencies and the environments and
//! architectures it is installed for:
//!
//! ```json
//! {
//!   "versions": [
//!     {
//!       "application": "zlib",
//!       "version": "1.2.11",
//!       "module_load": "zlib/1.2.11-GCCcore-9.3.0",
//!       "dependencies": [{"application": "GCCcore", "version": "9.3.0"}],
//!       "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{Module, ModuleGraph, ModuleId, ModuleIdError};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("invalid module in snapshot: {0}")]
    InvalidModule(#[from] ModuleIdError),

    #[error("module {0} appears more than once in the snapshot")]
    DuplicateModule(ModuleId),
}

/// Reference to another version by application and version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub application: String,
    pub version: String,
}

/// One catalog link: the version is installed for this environment and
/// architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub bear_apps_version: String,
    pub architecture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub application: String,
    pub version: String,
    #[serde(default)]
    pub module_load: String,
    #[serde(default)]
    pub dependencies: Vec<ModuleRef>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub versions: Vec<VersionRecord>,
}

impl CatalogSnapshot {
    /// Read and parse a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::InvalidJson)
    }

    /// Build the graph: one node per version, one edge per dependency.
    ///
    /// Dependencies on versions missing from the snapshot are kept as edges
    /// to unknown nodes. Such nodes are never installed anywhere, so they
    /// never show up in a hide-list.
    pub fn into_graph(self) -> Result<ModuleGraph, SnapshotError> {
        let graph = ModuleGraph::new();
        let mut edges = Vec::new();

        for record in self.versions {
            let id = ModuleId::new(record.application, record.version)?;

            let mut module = Module::new(id.clone()).with_module_load(record.module_load);
            for link in record.links {
                module = module.with_link(link.bear_apps_version, link.architecture);
            }

            graph
                .add_module(module)
                .map_err(|_| SnapshotError::DuplicateModule(id.clone()))?;

            for dep in record.dependencies {
                edges.push((id.clone(), ModuleId::new(dep.application, dep.version)?));
            }
        }

        for (from, to) in edges {
            if !graph.contains(&to) {
                debug!(module = %from, dependency = %to, "dependency not in snapshot");
            }
            graph.add_dependency(from, to);
        }

        Ok(graph)
    }
}
