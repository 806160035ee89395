//! The crate's own diagnostics (config loading, logger construction).
//!
//! Off until [`init`] is called, then written to stderr under the `linelog`
//! area so they never mix with the application's stdout lines. `OnceLock`
//! makes the first `init` win; later calls are no-ops.

use crate::level::Level;
use crate::logger::Logger;
use std::io::{self, Stderr};
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger<Stderr>> = OnceLock::new();

/// Turns on library diagnostics at `verbosity`.
pub fn init(verbosity: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::builder()
            .verbosity(verbosity)
            .area_name("linelog")
            .destination(io::stderr())
            .build()
            .unwrap_or_else(|_| Logger::from_parts(verbosity, false, Some(io::stderr())))
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Calls before `init` vanish.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.line(level).append(scope).append(": ").append(msg);
    }
}

/// Finest diagnostics.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Diagnostics for debugging the library itself.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Notable events, such as a config file being loaded.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable problems.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
