//! TOML configuration loading and per-area override merging.

mod structs;

pub use structs::{AreaConfig, GeneralConfig, TerminalConfig};

use crate::fmt::ColorMode;
use crate::internal;
use crate::level::Level;
use crate::line::LineMode;
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the default config location.
pub const CONFIG_ENV: &str = "LINELOG_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// An empty file is a valid config: every section falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    /// Keyed by area name.
    pub areas: HashMap<String, AreaConfig>,
}

impl Config {
    /// Loads the user's config. A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if no config directory can be determined, the file can't be read,
    /// or it is not valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads from an explicit path. A leading `~` is expanded.
    ///
    /// # Errors
    /// I/O errors other than "not found", and TOML parse errors.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = Path::new(&expanded);
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `$LINELOG_CONFIG` if set, otherwise `config.toml` in the platform config directory.
    ///
    /// # Errors
    /// `Error::ConfigDirNotFound` if the environment variable is unset and no
    /// home directory is known.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
        }
        ProjectDirs::from("", "", "linelog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config as seen by one area: `[areas.<name>]` overrides applied and the area name set.
    #[must_use]
    pub fn for_area(&self, area: &str) -> Self {
        let mut config = self.clone();
        config.general.area = area.to_string();

        if let Some(overrides) = self.areas.get(area) {
            if let Some(ref verbosity) = overrides.verbosity {
                config.general.verbosity.clone_from(verbosity);
            }
            if let Some(ref colors) = overrides.colors {
                config.terminal.colors.clone_from(colors);
            }
            if let Some(ref separator) = overrides.time_separator {
                config.terminal.time_separator.clone_from(separator);
            }
            if let Some(ref mode) = overrides.line_mode {
                config.terminal.line_mode.clone_from(mode);
            }
        }

        config
    }

    /// # Errors
    /// `Error::InvalidArgument` for unknown level names.
    pub fn parse_verbosity(&self) -> Result<Level, crate::Error> {
        self.general.verbosity.parse()
    }

    /// # Errors
    /// `Error::InvalidArgument` for anything but auto/always/never (or a boolean).
    pub fn parse_color_mode(&self) -> Result<ColorMode, crate::Error> {
        self.terminal.colors.parse()
    }

    /// # Errors
    /// `Error::InvalidArgument` unless the value is exactly one character.
    pub fn parse_time_separator(&self) -> Result<char, crate::Error> {
        let value = &self.terminal.time_separator;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(crate::Error::InvalidArgument(format!(
                "time separator must be one character, got '{value}'"
            ))),
        }
    }

    /// # Errors
    /// `Error::InvalidArgument` for anything but immediate/buffered.
    pub fn parse_line_mode(&self) -> Result<LineMode, crate::Error> {
        self.terminal.line_mode.parse()
    }
}
