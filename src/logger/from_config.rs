//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Loads the user's config file and builds a stdout logger from it.
    ///
    /// # Errors
    /// Config loading errors and invalid config values.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        Self::from_config(&Config::load()?)
    }

    /// # Errors
    /// `Error::InvalidArgument` for invalid config values.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        LoggerBuilder::new().config(config)?.build()
    }

    /// Applies the `[areas.<area>]` overrides before building.
    ///
    /// # Errors
    /// `Error::InvalidArgument` for invalid config values.
    pub fn from_config_for_area(config: &Config, area: &str) -> Result<Self, crate::Error> {
        internal::debug("LOGGER", &format!("Building logger for area={area}"));
        Self::from_config(&config.for_area(area))
    }
}

impl<D, B> LoggerBuilder<D, B> {
    /// Copies every setting from `config`; the destination and bound stay as they are.
    ///
    /// # Errors
    /// `Error::InvalidArgument` for invalid config values.
    pub fn config(self, config: &Config) -> Result<Self, crate::Error> {
        let verbosity = config.parse_verbosity()?;
        let color_mode = config.parse_color_mode()?;
        let separator = config.parse_time_separator()?;
        let line_mode = config.parse_line_mode()?;
        internal::debug(
            "LOGGER",
            &format!(
                "verbosity={verbosity} colors={} line_mode={line_mode}",
                color_mode.as_str()
            ),
        );

        Ok(self
            .verbosity(verbosity)
            .color_mode(color_mode)
            .area_name(config.general.area.clone())
            .time_separator(separator)
            .line_mode(line_mode))
    }
}
