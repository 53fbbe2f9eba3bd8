//! Diagnostic logging to standard error
//!
//! Standard output carries only the report, so all log output goes to
//! stderr. The filter is read from `STALEPKG_LOG` (`tracing` directive
//! syntax), defaulting to `warn`; `--verbose` forces debug output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "STALEPKG_LOG";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stalepkg=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Keep an already installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
