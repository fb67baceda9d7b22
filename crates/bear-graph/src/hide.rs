//! Lmod hide-list generation.
//!
//! For every version of an anchor application (by default `GCCcore`) installed
//! in an environment, the modules installed in that environment that do not
//! depend on the anchor are collected into a [`HideList`]. Each list is written
//! to its own file of `hide_version("...")` lines, which Lmod reads to hide
//! modules that are incompatible with the selected toolchain.
//!
//! Modules with no toolchain dependency at all are hidden from every list.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{DependencyResolver, Module, ModuleGraph, ModuleId};

#[derive(Debug, Error)]
pub enum HideError {
    #[error("failed to write hide file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("anchor version of {anchor} cannot be used in a hide file name")]
    UnsafeFileName { anchor: ModuleId },
}

/// Which environment to scan and which application anchors the lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideOptions {
    pub environment: String,
    pub anchor_application: String,
}

impl Default for HideOptions {
    fn default() -> Self {
        Self {
            environment: "live".to_string(),
            anchor_application: "GCCcore".to_string(),
        }
    }
}

/// A module to hide, with the string Lmod knows it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenModule {
    pub id: ModuleId,
    pub module_load: String,
}

/// Modules to hide for one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideList {
    pub anchor: ModuleId,
    pub hidden: Vec<HiddenModule>,
}

impl HideList {
    /// Render in Lmod hide-file format, one `hide_version("...")` per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for module in &self.hidden {
            out.push_str("hide_version(\"");
            out.push_str(&module.module_load);
            out.push_str("\")\n");
        }
        out
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn file_name(&self, naming: &HideFileNaming) -> String {
        format!(
            "{}{}{}",
            naming.prefix,
            self.anchor.version(),
            naming.extension
        )
    }
}

/// How hide files are named: `<prefix><anchor version><extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideFileNaming {
    pub prefix: String,
    pub extension: String,
}

impl Default for HideFileNaming {
    fn default() -> Self {
        Self {
            prefix: "gcc".to_string(),
            extension: ".lua".to_string(),
        }
    }
}

/// Result of one batch over an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidePlan {
    /// Distinct modules installed in the environment.
    pub installed_count: usize,
    /// One list per anchor version, ordered by version.
    pub lists: Vec<HideList>,
}

/// Builds the hide-lists of one environment.
///
/// One resolver is shared by all anchors, so dependency sub-paths walked for
/// one anchor are answered from cache for the next module that reaches them.
pub struct HideListBuilder<'g> {
    installed: Vec<Arc<Module>>,
    anchors: Vec<Arc<Module>>,
    resolver: DependencyResolver<'g>,
}

impl<'g> HideListBuilder<'g> {
    pub fn new(graph: &'g ModuleGraph, options: &HideOptions) -> Self {
        let installed = graph.installed_in(&options.environment);
        let anchors = graph.installed_versions(&options.anchor_application, &options.environment);

        info!(
            "There are {} modules in the {} environment",
            installed.len(),
            options.environment
        );

        Self {
            installed,
            anchors,
            resolver: DependencyResolver::new(graph),
        }
    }

    /// Distinct modules installed in the environment.
    pub fn installed_count(&self) -> usize {
        self.installed.len()
    }

    /// One list per anchor version, ordered by version.
    pub fn build(&mut self) -> Vec<HideList> {
        let mut lists = Vec::with_capacity(self.anchors.len());

        for anchor in &self.anchors {
            let resolver = &mut self.resolver;
            let hidden: Vec<HiddenModule> = self
                .installed
                .iter()
                .filter(|module| !resolver.depends_on(&module.id, &anchor.id))
                .map(|module| HiddenModule {
                    id: module.id.clone(),
                    module_load: module.load_string(),
                })
                .collect();

            debug!(anchor = %anchor.id, hidden = hidden.len(), "built hide list");
            lists.push(HideList {
                anchor: anchor.id.clone(),
                hidden,
            });
        }

        debug!(
            cached = self.resolver.cache_len(),
            hits = self.resolver.cache_hits(),
            "dependency cache"
        );
        lists
    }
}

/// Compute the hide-list of every anchor version installed in the environment.
pub fn build_hide_lists(graph: &ModuleGraph, options: &HideOptions) -> HidePlan {
    let mut builder = HideListBuilder::new(graph, options);
    let lists = builder.build();
    HidePlan {
        installed_count: builder.installed_count(),
        lists,
    }
}

/// Write one hide file into `dir`, replacing any existing file atomically.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the destination, so a failed write never leaves a truncated
/// hide file behind. Anchor versions that would leave `dir` or name a
/// subdirectory are rejected.
pub fn write_hide_file(
    dir: &Path,
    list: &HideList,
    naming: &HideFileNaming,
) -> Result<PathBuf, HideError> {
    let version = list.anchor.version();
    if version.contains(['/', '\\']) || version.contains("..") {
        return Err(HideError::UnsafeFileName {
            anchor: list.anchor.clone(),
        });
    }

    let path = dir.join(list.file_name(naming));
    let write_error = |source| HideError::Write {
        path: path.clone(),
        source,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".bear-hide-");
    #[cfg(unix)]
    builder.permissions(hide_file_permissions());

    let mut tmp = builder.tempfile_in(dir).map_err(write_error)?;
    tmp.write_all(list.render().as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(&path).map_err(|e| write_error(e.error))?;

    Ok(path)
}

#[cfg(unix)]
fn hide_file_permissions() -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;
    // Lmod runs as the user loading modules.
    std::fs::Permissions::from_mode(0o644)
}
