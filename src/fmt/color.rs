//! The fixed 16-color ANSI palette and the tokens callers stream into a line.

use crate::level::Level;
use crate::output::Destination;
use std::ops::Not;
use std::str::FromStr;

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// Named palette entry. `NoColor` is the sentinel that switches back to the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    DarkGray,
    Black,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    Orange,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Gray,
    NoColor,
}

impl Color {
    /// Complete escape sequence, ready to be written.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::DarkGray => "\x1b[01;30m",
            Self::Black => "\x1b[00;30m",
            Self::Red => "\x1b[01;31m",
            Self::DarkRed => "\x1b[00;31m",
            Self::Green => "\x1b[01;32m",
            Self::DarkGreen => "\x1b[00;32m",
            Self::Yellow => "\x1b[01;33m",
            Self::Orange => "\x1b[00;33m",
            Self::Blue => "\x1b[01;34m",
            Self::DarkBlue => "\x1b[00;34m",
            Self::Magenta => "\x1b[01;35m",
            Self::DarkMagenta => "\x1b[00;35m",
            Self::Cyan => "\x1b[01;36m",
            Self::DarkCyan => "\x1b[00;36m",
            Self::White => "\x1b[01;37m",
            Self::Gray => "\x1b[00;37m",
            Self::NoColor => RESET,
        }
    }

    /// Color used for the prefix of lines at `level`. Trace, `All` and `Off` keep the default color.
    #[must_use]
    pub const fn for_level(level: Level) -> Option<Self> {
        match level {
            Level::Debug => Some(Self::DarkBlue),
            Level::Info => Some(Self::DarkGreen),
            Level::Warn => Some(Self::Orange),
            Level::Error => Some(Self::DarkRed),
            Level::Fatal => Some(Self::Red),
            Level::All | Level::Trace | Level::Off => None,
        }
    }

    /// Sticky token of this color, see [`ColorToken::persist`].
    #[must_use]
    pub const fn persist(self) -> ColorToken {
        ColorToken::new(self).persist()
    }

    /// All palette entries, `NoColor` last.
    pub const ALL: &'static [Self] = &[
        Self::DarkGray,
        Self::Black,
        Self::Red,
        Self::DarkRed,
        Self::Green,
        Self::DarkGreen,
        Self::Yellow,
        Self::Orange,
        Self::Blue,
        Self::DarkBlue,
        Self::Magenta,
        Self::DarkMagenta,
        Self::Cyan,
        Self::DarkCyan,
        Self::White,
        Self::Gray,
        Self::NoColor,
    ];
}

/// A color directive streamed into a line.
///
/// One-shot tokens (the default) color exactly the next value and then reset.
/// Sticky tokens keep the color until the next token. `!token` makes a token sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub color: Color,
    pub sticky: bool,
}

impl ColorToken {
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            sticky: false,
        }
    }

    #[must_use]
    pub const fn persist(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// True if a reset has to follow the next value written after this token.
    #[must_use]
    pub const fn resets_after_value(self) -> bool {
        !self.sticky && !matches!(self.color, Color::NoColor)
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl Not for ColorToken {
    type Output = Self;

    fn not(self) -> Self {
        self.persist()
    }
}

impl Not for Color {
    type Output = ColorToken;

    fn not(self) -> ColorToken {
        self.persist()
    }
}

/// Whether a logger colorizes. `Auto` asks the destination if it is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn resolve<D: Destination + ?Sized>(self, destination: &D) -> bool {
        match self {
            Self::Auto => destination.is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl From<bool> for ColorMode {
    fn from(colorize: bool) -> Self {
        if colorize { Self::Always } else { Self::Never }
    }
}

impl FromStr for ColorMode {
    type Err = crate::Error;

    /// Booleans are accepted too, so `colors = "true"` reads naturally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "true" | "on" => Ok(Self::Always),
            "never" | "false" | "off" => Ok(Self::Never),
            _ => Err(crate::Error::InvalidArgument(format!(
                "unknown color mode: '{s}'"
            ))),
        }
    }
}
