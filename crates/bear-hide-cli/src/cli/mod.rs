//! Command-line interface definition for bear-hide.
//!
//! # Command Structure
//!
//! - `bear-hide generate` - Write one hide file per toolchain version
//! - `bear-hide why` - Explain whether and how one module requires another
//! - `bear-hide check` - Summarize a snapshot and report dependency cycles

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs, WhyArgs};

/// bear-hide - Lmod hide files for BEAR Apps toolchains
#[derive(Parser, Debug)]
#[command(
    name = "bear-hide",
    version,
    about = "Generate Lmod hide files for BEAR Apps toolchain environments",
    long_about = "bear-hide reads a snapshot of the BEAR Apps catalog and, for every\n\
                  GCCcore version installed in an environment, writes a Lmod hide file\n\
                  listing the installed modules that do not depend on that GCCcore."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./bear-hide.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
