//! Configuration for bear-hide with multi-source loading.
//!
//! Priority, highest first: CLI flags > `BEAR_HIDE_*` environment variables >
//! config file (`bear-hide.toml` or `--config`) > defaults.

mod defaults;
mod loading;
mod validation;

use std::path::PathBuf;

use bear_graph::{HideFileNaming, HideOptions};
use serde::{Deserialize, Serialize};

pub use defaults::*;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bear-hide.toml";

/// Prefix of environment variables that override config file values.
pub const ENV_PREFIX: &str = "BEAR_HIDE_";

/// Settings for hide-file generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HideConfig {
    /// Directory the hide files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// BEAR Apps Version whose installed modules are considered
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Application whose versions anchor the hide-lists
    #[serde(default = "default_anchor_application")]
    pub anchor_application: String,

    /// Hide file name prefix, followed by the anchor version
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Hide file name extension, including the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl Default for HideConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            environment: default_environment(),
            anchor_application: default_anchor_application(),
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}

impl HideConfig {
    pub fn hide_options(&self) -> HideOptions {
        HideOptions {
            environment: self.environment.clone(),
            anchor_application: self.anchor_application.clone(),
        }
    }

    pub fn naming(&self) -> HideFileNaming {
        HideFileNaming {
            prefix: self.file_prefix.clone(),
            extension: self.file_extension.clone(),
        }
    }
}
