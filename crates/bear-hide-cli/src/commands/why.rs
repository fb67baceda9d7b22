//! `bear-hide why`: explain one dependency query.

use bear_graph::DependencyResolver;

use crate::cli::WhyArgs;
use crate::commands::load_graph;
use crate::error::{CliError, Result};

pub fn execute(args: WhyArgs) -> Result<()> {
    let graph = load_graph(&args.snapshot)?;

    // Dependency targets missing from the snapshot are known, without
    // dependencies of their own.
    if !graph.is_known(&args.module) {
        return Err(CliError::UnknownModule(args.module));
    }

    let found = DependencyResolver::new(&graph).depends_on(&args.module, &args.target);

    match graph.dependency_chain(&args.module, &args.target) {
        Some(chain) if found => {
            println!("{} depends on {}", args.module, args.target);
            println!("  {}", chain.format_chain());
        }
        _ => println!("{} does not depend on {}", args.module, args.target),
    }

    Ok(())
}
