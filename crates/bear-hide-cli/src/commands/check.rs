//! `bear-hide check`: snapshot summary and cycle detection.

use crate::cli::CheckArgs;
use crate::commands::load_graph;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    let graph = load_graph(&args.snapshot)?;
    let stats = graph.statistics();

    println!("modules:              {}", stats.module_count);
    println!("dependency edges:     {}", stats.edge_count);
    println!("unknown dependencies: {}", stats.unknown_dependency_count);
    println!("leaf modules:         {}", stats.leaf_count);
    println!("environments:         {}", stats.environment_count);

    let cycles = graph.find_cycles();
    if cycles.is_empty() {
        ui::success("No dependency cycles");
        return Ok(());
    }

    for cycle in &cycles {
        println!("cycle: {}", cycle.format_chain());
    }
    ui::warning(&format!(
        "{} found",
        ui::plural(cycles.len(), "dependency cycle")
    ));
    Err(CliError::CyclesFound(cycles.len()))
}
