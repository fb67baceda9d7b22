//! Error handling for the bear-hide CLI.
//!
//! `CliError` is what every command returns. Domain errors from `bear-graph`
//! and configuration errors convert into it via `From`, and `main` turns it
//! into a `miette` report.

use std::path::PathBuf;

use bear_graph::{ModuleId, SnapshotError};
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (missing file, bad values)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog snapshot could not be loaded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Module named on the command line is not in the snapshot
    #[error("Module not found in snapshot: {0}\n\nHint: Module names are Application/Version and case-sensitive")]
    UnknownModule(ModuleId),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Some anchors could not be written; the others were
    #[error("{failed} of {total} hide files could not be written")]
    PartialFailure { failed: usize, total: usize },

    /// The snapshot contains dependency cycles
    #[error("{0} dependency cycle(s) found\n\nHint: Fix the dependency records in the catalog")]
    CyclesFound(usize),

    /// Error message with context prepended by [`ResultExt::context`]
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create bear-hide.toml or check the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config sources could not be merged or deserialized
    #[error("Failed to load configuration: {0}\n\nHint: Check bear-hide.toml syntax and BEAR_HIDE_* variables")]
    Load(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert CliError to a miette Report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::PartialFailure { failed, total } => miette::miette!(
            help = "Check that the output directory is writable and that no directory blocks a hide file name",
            "{failed} of {total} hide files could not be written"
        ),
        CliError::Snapshot(e) => miette::miette!(
            help = "Re-export the catalog snapshot and try again",
            "{}",
            e
        ),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_path_maps_not_found() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.with_path("/tmp/missing.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(p) if p == PathBuf::from("/tmp/missing.json")));
    }

    #[test]
    fn test_with_path_keeps_other_errors() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        let err = result.with_path("/tmp/x").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_context_prefixes_message() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result.context("Cannot create output directory /hide").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot create output directory /hide: I/O error: denied"
        );
    }

    #[test]
    fn test_partial_failure_message() {
        let err = CliError::PartialFailure {
            failed: 1,
            total: 3,
        };
        assert_eq!(err.to_string(), "1 of 3 hide files could not be written");
    }

    #[test]
    fn test_miette_conversion_keeps_message() {
        let report = cli_error_to_miette(CliError::CyclesFound(2));
        assert!(report.to_string().contains("2 dependency cycle(s) found"));

        let report = cli_error_to_miette(CliError::PartialFailure {
            failed: 1,
            total: 2,
        });
        assert!(report.to_string().contains("1 of 2 hide files could not be written"));
    }
}
