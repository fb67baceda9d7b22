//! Module identity: an application name plus a version string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing or parsing a [`ModuleId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleIdError {
    #[error("application name must not be empty")]
    EmptyApplication,

    #[error("version of '{0}' must not be empty")]
    EmptyVersion(String),

    #[error("application name '{0}' must not contain '/'")]
    SlashInApplication(String),

    #[error("'{0}' is not of the form Application/Version")]
    MissingSeparator(String),
}

/// Stable identity of an installed module.
///
/// Equality, hashing and ordering are by value, so two ids built from the same
/// strings are interchangeable as map keys. Ordering is by application name
/// first, then by version string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawModuleId")]
pub struct ModuleId {
    application: String,
    version: String,
}

/// Unvalidated wire form; deserialization goes through [`ModuleId::new`].
#[derive(Deserialize)]
struct RawModuleId {
    application: String,
    version: String,
}

impl TryFrom<RawModuleId> for ModuleId {
    type Error = ModuleIdError;

    fn try_from(raw: RawModuleId) -> Result<Self, Self::Error> {
        Self::new(raw.application, raw.version)
    }
}

impl ModuleId {
    /// Create a module id, validating both parts.
    ///
    /// Versions may contain `/` (some module trees nest them); application
    /// names may not, because `Application/Version` is split on the first `/`.
    pub fn new(
        application: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, ModuleIdError> {
        let application = application.into();
        let version = version.into();

        if application.is_empty() {
            return Err(ModuleIdError::EmptyApplication);
        }
        if application.contains('/') {
            return Err(ModuleIdError::SlashInApplication(application));
        }
        if version.is_empty() {
            return Err(ModuleIdError::EmptyVersion(application));
        }

        Ok(Self {
            application,
            version,
        })
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `Application/Version` form used by `module load`.
    pub fn load_string(&self) -> String {
        format!("{}/{}", self.application, self.version)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.application, self.version)
    }
}

impl FromStr for ModuleId {
    type Err = ModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (application, version) = s
            .split_once('/')
            .ok_or_else(|| ModuleIdError::MissingSeparator(s.to_string()))?;
        Self::new(application, version)
    }
}
