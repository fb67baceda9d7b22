//! `bear-hide generate`: write one hide file per anchor version.

use std::fs;
use std::path::Path;

use bear_graph::{build_hide_lists, write_hide_file};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::commands::load_graph;
use crate::config::HideConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Run hide-file generation.
///
/// A failure to write one anchor's file is reported and the remaining anchors
/// are still written; the command then fails with the number of failures.
pub fn execute(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = HideConfig::load(&args.overrides(), config_path)?;
    let graph = load_graph(&args.snapshot)?;

    let plan = build_hide_lists(&graph, &config.hide_options());
    if plan.lists.is_empty() {
        ui::warning(&format!(
            "No {} versions installed in the {} environment; nothing to write",
            config.anchor_application, config.environment
        ));
        return Ok(());
    }

    let naming = config.naming();

    if args.dry_run {
        for list in &plan.lists {
            ui::info(&format!(
                "{} {}: {} would be hidden by {}",
                config.anchor_application,
                list.anchor.version(),
                ui::plural(list.len(), "module"),
                config.out_dir.join(list.file_name(&naming)).display()
            ));
        }
        return Ok(());
    }

    fs::create_dir_all(&config.out_dir)
        .with_path(&config.out_dir)
        .context(format!(
            "Cannot create output directory {}",
            config.out_dir.display()
        ))?;

    let total = plan.lists.len();
    let mut failed = 0;
    for list in &plan.lists {
        match write_hide_file(&config.out_dir, list, &naming) {
            Ok(path) => info!(
                "{} {}: {} modules will be hidden by {}",
                config.anchor_application,
                list.anchor.version(),
                list.len(),
                path.display()
            ),
            Err(err) => {
                ui::error(&format!(
                    "{} {}: {}",
                    config.anchor_application,
                    list.anchor.version(),
                    err
                ));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::PartialFailure { failed, total });
    }

    ui::success(&format!(
        "Wrote {} to {}",
        ui::plural(total, "hide file"),
        config.out_dir.display()
    ));
    Ok(())
}
