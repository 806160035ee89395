//! Severity levels and the gate that decides whether a line is ever built.

mod gate;

pub use gate::{StaticBound, bound, compiled_in, is_enabled};

use std::fmt;
use std::str::FromStr;

/// Declaration order is the severity order: `All` is the most verbose threshold,
/// `Off` suppresses everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Threshold value that lets every message through.
    All = 0,
    /// Program flow, the most verbose message severity.
    Trace = 1,
    /// Diagnostics useful while developing.
    Debug = 2,
    /// Informational messages such as expected processing times.
    Info = 3,
    /// Something looks wrong but processing continues.
    #[default]
    Warn = 4,
    /// Non-fatal errors.
    Error = 5,
    /// The application is about to fail.
    Fatal = 6,
    /// Threshold value that suppresses every message.
    Off = 7,
}

impl Level {
    /// Canonical display name, as written into every log line prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "OFF",
        }
    }

    /// Every level in severity order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::All,
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::Off,
        ]
    }

    /// The six severities a message can actually carry.
    #[must_use]
    pub const fn message_levels() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
        ]
    }

    /// `Ord` is not usable in `const fn`, the gate compares discriminants instead.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = crate::Error;

    /// Case-insensitive match against the canonical names. `warn` is accepted
    /// next to the canonical `WARNING` because config files tend to use it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            "OFF" => Ok(Self::Off),
            _ => Err(crate::Error::InvalidArgument(format!(
                "unknown log level: '{s}'"
            ))),
        }
    }
}

/// Free-function form of [`Level::as_str`].
#[must_use]
pub const fn level_name(level: Level) -> &'static str {
    level.as_str()
}

/// Free-function form of `str::parse::<Level>`.
///
/// # Errors
/// `Error::InvalidArgument` if `name` matches none of the canonical names.
pub fn level_from_name(name: &str) -> Result<Level, crate::Error> {
    name.parse()
}
