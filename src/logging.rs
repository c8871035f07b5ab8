//! Diagnostic logging setup.
//!
//! Library code only emits `tracing` events; nothing is printed unless the
//! binary installs a subscriber here. `GROCERIES_LOG` takes an EnvFilter
//! directive (`debug`, `groceries::database=trace`, ...) and wins over the
//! `--verbose` flag.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "GROCERIES_LOG";

/// Filter used when `GROCERIES_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "off"
    }
}

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
