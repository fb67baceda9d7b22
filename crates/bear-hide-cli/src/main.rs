//! bear-hide entry point: parse arguments, set up logging, dispatch.

use bear_hide_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::set_colors(!args.no_color && logger::should_use_colors());

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(generate_args, config_path)
        }
        cli::Command::Why(why_args) => commands::why_execute(why_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
