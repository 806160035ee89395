//! One error type for the whole crate so callers can `?` across level parsing,
//! config loading, and line emission without juggling per-module errors.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A caller-supplied value violated a local precondition (unknown level name,
    /// area name that would break the single-line format, malformed config value).
    InvalidArgument(String),
    /// Writing a line or reading a config file failed.
    Io(std::io::Error),
    /// Config file is not valid TOML or does not match the schema.
    ConfigParse(toml::de::Error),
    /// No home directory, so the default config location can't be derived.
    ConfigDirNotFound,
    /// The shared logger handle can only be set once per process.
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::AlreadyInitialized => write!(f, "global logger already initialized"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
