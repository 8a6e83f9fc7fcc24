//! Logging bootstrap
//!
//! Diagnostics go to stderr so they never mix with command output on stdout.
//! Initialization happens at most once per process and never panics.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start the stderr logger at `level`.
///
/// Later calls are no-ops once a logger is running.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    // Another thread may have won the race; its handle stays in charge.
    let _ = LOGGER.set(handle);
    debug!("logging initialized at level {}", level);
    Ok(())
}
