use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use tracing::debug;

use super::{CONFIG_FILE_NAME, ConfigOverrides, ENV_PREFIX, HideConfig};
use crate::error::{ConfigError, Result};

/// Keys that may be set through `BEAR_HIDE_*` variables.
const ENV_KEYS: &[&str] = &[
    "out_dir",
    "environment",
    "anchor_application",
    "file_prefix",
    "file_extension",
];

impl HideConfig {
    /// Load configuration from multiple sources.
    ///
    /// An explicit `config_path` must exist; otherwise `bear-hide.toml` in the
    /// working directory is used when present.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // BEAR_HIDE_OUT_DIR, BEAR_HIDE_ENVIRONMENT, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }
}
