use std::path::PathBuf;

use bear_graph::ModuleId;
use clap::{Args, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one hide file per anchor version installed in the environment
    ///
    /// Each file is named <prefix><version><extension> (gcc9.3.0.lua by
    /// default) and lists every installed module that does not depend on
    /// that version.
    Generate(GenerateArgs),

    /// Show whether MODULE depends on TARGET and through which chain
    Why(WhyArgs),

    /// Print snapshot statistics and fail if dependency cycles exist
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Catalog snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Directory the hide files are written to
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// BEAR Apps Version to scan
    #[arg(short, long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Application whose versions anchor the hide files
    #[arg(short, long, value_name = "APPLICATION")]
    pub anchor: Option<String>,

    /// Hide file name prefix
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Hide file name extension, including the dot
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Compute the hide files and report them without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            out_dir: self.out_dir.clone(),
            environment: self.environment.clone(),
            anchor_application: self.anchor.clone(),
            file_prefix: self.prefix.clone(),
            file_extension: self.extension.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct WhyArgs {
    /// Catalog snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Module to explain, as Application/Version
    #[arg(value_name = "MODULE")]
    pub module: ModuleId,

    /// Possible dependency, as Application/Version
    #[arg(value_name = "TARGET")]
    pub target: ModuleId,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}
