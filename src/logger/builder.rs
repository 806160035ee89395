//! Stepwise logger construction. The destination and the static bound are type
//! parameters, so switching either one changes the builder's type.

use super::Logger;
use crate::fmt::{AreaName, ColorMode};
use crate::level::{Level, StaticBound, bound};
use crate::line::LineMode;
use crate::output::Destination;
use std::io::{self, Stdout};
use std::marker::PhantomData;

pub struct LoggerBuilder<D = Stdout, B = bound::All> {
    verbosity: Level,
    color_mode: ColorMode,
    area: String,
    time_separator: char,
    line_mode: LineMode,
    destination: Option<D>,
    _bound: PhantomData<fn() -> B>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stdout, verbosity `Warn`, colors auto-detected, no area, `:` separator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbosity: Level::default(),
            color_mode: ColorMode::Auto,
            area: String::new(),
            time_separator: ':',
            line_mode: LineMode::Immediate,
            destination: Some(io::stdout()),
            _bound: PhantomData,
        }
    }
}

impl<D, B> LoggerBuilder<D, B> {
    #[must_use]
    pub const fn verbosity(mut self, verbosity: Level) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Explicit flag, skips terminal detection.
    #[must_use]
    pub const fn colorize(mut self, colorize: bool) -> Self {
        self.color_mode = if colorize {
            ColorMode::Always
        } else {
            ColorMode::Never
        };
        self
    }

    #[must_use]
    pub const fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Validated and truncated in [`build`](Self::build).
    #[must_use]
    pub fn area_name(mut self, name: impl Into<String>) -> Self {
        self.area = name.into();
        self
    }

    #[must_use]
    pub const fn time_separator(mut self, separator: char) -> Self {
        self.time_separator = separator;
        self
    }

    #[must_use]
    pub const fn line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Sends lines somewhere other than stdout.
    #[must_use]
    pub fn destination<D2>(self, destination: D2) -> LoggerBuilder<D2, B> {
        LoggerBuilder {
            verbosity: self.verbosity,
            color_mode: self.color_mode,
            area: self.area,
            time_separator: self.time_separator,
            line_mode: self.line_mode,
            destination: Some(destination),
            _bound: PhantomData,
        }
    }

    /// No destination at all: every line the logger hands out is inert.
    #[must_use]
    pub fn detached(mut self) -> Self {
        self.destination = None;
        self
    }

    /// Fixes the static bound, see [`bound`](crate::level::bound).
    #[must_use]
    pub fn bound<B2>(self) -> LoggerBuilder<D, B2> {
        LoggerBuilder {
            verbosity: self.verbosity,
            color_mode: self.color_mode,
            area: self.area,
            time_separator: self.time_separator,
            line_mode: self.line_mode,
            destination: self.destination,
            _bound: PhantomData,
        }
    }
}

impl<D: Destination, B: StaticBound> LoggerBuilder<D, B> {
    /// # Errors
    /// `Error::InvalidArgument` if the area name contains a line break before any NUL.
    pub fn build(self) -> Result<Logger<D, B>, crate::Error> {
        let area = AreaName::new(&self.area)?;
        let colorize = self
            .destination
            .as_ref()
            .is_some_and(|d| self.color_mode.resolve(d));

        let mut logger = Logger::from_parts(self.verbosity, colorize, self.destination);
        let style = logger.style_mut();
        style.area = area;
        style.time_separator = self.time_separator;
        style.mode = self.line_mode;
        Ok(logger)
    }
}
