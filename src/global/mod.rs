//! Optional process-wide logger for code that can't thread a `&Logger` through.
//!
//! Lifecycle: set once with [`init`] before first use, read with [`get`] or
//! [`logger`], never replaced afterwards. The logger is immutable once shared;
//! configure it completely before handing it over.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// # Errors
/// `Error::AlreadyInitialized` if a logger was installed before; the new one is dropped.
pub fn init(logger: Logger) -> Result<(), crate::Error> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| crate::Error::AlreadyInitialized)?;
    internal::debug("GLOBAL", "Global logger installed");
    Ok(())
}

/// Builds the global logger from `config`, applying `[areas.<area>]` overrides when given.
///
/// # Errors
/// Invalid config values, or `Error::AlreadyInitialized`.
pub fn init_from_config(config: &Config, area: Option<&str>) -> Result<(), crate::Error> {
    let logger = match area {
        Some(area) => Logger::from_config_for_area(config, area)?,
        None => Logger::from_config(config)?,
    };
    init(logger)
}

/// `None` until [`init`] succeeded.
#[must_use]
pub fn get() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// The installed logger, or a default stdout logger (verbosity `Warn`, colors
/// auto-detected) installed on first call.
#[must_use]
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(Level::default()))
}

#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}
