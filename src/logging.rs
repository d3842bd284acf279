// Logging setup
//
// The terminal belongs to the TUI, so tracing output goes to a file and only
// when NIMBUS_LOG names one. NIMBUS_LOG_LEVEL takes an EnvFilter directive.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Path of the log file; logging stays off when unset
pub const LOG_PATH_ENV: &str = "NIMBUS_LOG";

/// EnvFilter directive, e.g. `debug` or `nimbus::app=trace`
pub const LOG_LEVEL_ENV: &str = "NIMBUS_LOG_LEVEL";

const DEFAULT_LEVEL: &str = "info";

/// Build the filter from a directive, falling back to `info` when it does not parse
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the file subscriber if requested
///
/// Never fails the program: an unopenable file or an already installed
/// subscriber just leaves logging off. Returns whether logging is active.
pub fn init() -> bool {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return false;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let level = std::env::var(LOG_LEVEL_ENV).ok();
    let installed = fmt()
        .with_env_filter(build_filter(level.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log = %path.to_string_lossy(),
            "Nimbus logging started"
        );
    }
    installed
}
