//! bear-hide CLI - Lmod hide files for BEAR Apps toolchain environments.
//!
//! This crate drives `bear-graph` from the command line: it loads a catalog
//! snapshot, resolves which installed modules depend on each version of the
//! base toolchain, and writes one hide file per toolchain version.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`config`] - Layered configuration (defaults, file, environment, flags)
//! - [`commands`] - `generate`, `why` and `check`
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
