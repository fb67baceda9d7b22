//! Module node stored in the graph.

use serde::{Deserialize, Serialize};

use crate::ModuleId;

/// One installation of a module: an environment (BEAR Apps Version, e.g.
/// `live` or `2021a`) on a given architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleLink {
    pub environment: String,
    pub architecture: String,
}

/// A version of an application, as recorded in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,

    /// Load string as recorded in the catalog. May be empty, in which case
    /// [`Module::load_string`] falls back to `Application/Version`.
    #[serde(default)]
    pub module_load: String,

    /// Environments and architectures this version is installed for.
    #[serde(default)]
    pub links: Vec<ModuleLink>,
}

impl Module {
    pub fn new(id: ModuleId) -> Self {
        Self {
            id,
            module_load: String::new(),
            links: Vec::new(),
        }
    }

    pub fn with_module_load(mut self, module_load: impl Into<String>) -> Self {
        self.module_load = module_load.into();
        self
    }

    /// Record an installation. Duplicate links are ignored.
    pub fn with_link(
        mut self,
        environment: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        let link = ModuleLink {
            environment: environment.into(),
            architecture: architecture.into(),
        };
        if !self.links.contains(&link) {
            self.links.push(link);
        }
        self
    }

    /// Canonical identifier passed to `module load`.
    pub fn load_string(&self) -> String {
        if self.module_load.is_empty() {
            self.id.load_string()
        } else {
            self.module_load.clone()
        }
    }

    pub fn is_installed_in(&self, environment: &str) -> bool {
        self.links.iter().any(|l| l.environment == environment)
    }

    /// Architectures this module is installed for in `environment`, sorted.
    pub fn architectures_in(&self, environment: &str) -> Vec<&str> {
        let mut archs: Vec<&str> = self
            .links
            .iter()
            .filter(|l| l.environment == environment)
            .map(|l| l.architecture.as_str())
            .collect();
        archs.sort_unstable();
        archs.dedup();
        archs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModuleId {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_string_falls_back_to_id() {
        let module = Module::new(id("zlib/1.2.11"));
        assert_eq!(module.load_string(), "zlib/1.2.11");

        let module = Module::new(id("zlib/1.2.11")).with_module_load("zlib/1.2.11-GCCcore-9.3.0");
        assert_eq!(module.load_string(), "zlib/1.2.11-GCCcore-9.3.0");
    }

    #[test]
    fn test_environment_membership() {
        let module = Module::new(id("zlib/1.2.11"))
            .with_link("live", "icelake")
            .with_link("live", "cascadelake")
            .with_link("live", "icelake")
            .with_link("2020a", "cascadelake");

        assert_eq!(module.links.len(), 3);
        assert!(module.is_installed_in("live"));
        assert!(module.is_installed_in("2020a"));
        assert!(!module.is_installed_in("2021b"));
        assert_eq!(module.architectures_in("live"), vec!["cascadelake", "icelake"]);
    }
}
