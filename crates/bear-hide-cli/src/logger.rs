//! Logging infrastructure for bear-hide.
//!
//! Sets up a `tracing` subscriber once at startup. Verbosity comes from the
//! global flags, falling back to `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "bear_graph=debug,bear_hide_cli=debug";
const QUIET_FILTER: &str = "bear_graph=error,bear_hide_cli=error";
const DEFAULT_FILTER: &str = "bear_graph=info,bear_hide_cli=info";

/// Initialize the tracing subscriber.
///
/// The logging level is determined in this order:
/// 1. `--verbose`: DEBUG for the bear crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. INFO for the bear crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise it
/// depends on whether stderr is a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
