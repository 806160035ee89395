use std::fmt;
use std::str::FromStr;

/// How the pieces of a line reach the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineMode {
    /// Every piece is written as soon as it is appended. Lines from concurrent
    /// threads sharing a destination may interleave.
    #[default]
    Immediate,
    /// The line is collected in memory and written with one `write_all` when it
    /// closes, so whole lines never interleave.
    Buffered,
}

impl LineMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Buffered => "buffered",
        }
    }
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "buffered" => Ok(Self::Buffered),
            _ => Err(crate::Error::InvalidArgument(format!(
                "unknown line mode: '{s}'"
            ))),
        }
    }
}
