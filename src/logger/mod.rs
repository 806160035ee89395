//! The logger holds the gate configuration and hands out one [`LineFormatter`]
//! per emission call.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::{AreaName, ColorMode};
use crate::level::{self, Level, StaticBound, bound};
use crate::line::{LineFormatter, LineMode, LineStyle};
use crate::output::Destination;
use std::fmt;
use std::io::{self, Stdout};
use std::marker::PhantomData;

/// Severity-gated line logger writing to one destination.
///
/// `B` is the static bound: severities below `B::LEVEL` can never be emitted by
/// this logger type, whatever the runtime verbosity says.
///
/// Concurrent lines on a shared destination may interleave in
/// [`LineMode::Immediate`]; switch to [`LineMode::Buffered`] or serialize the
/// emission calls when whole lines must stay intact across threads.
///
/// ```
/// use linelog::{Capture, Level, Logger};
///
/// let out = Capture::new();
/// let mut logger = Logger::builder()
///     .verbosity(Level::Warn)
///     .colorize(false)
///     .destination(out.clone())
///     .build()
///     .unwrap();
/// logger.set_area_name("base").unwrap();
///
/// logger.info().append("dropped");
/// let _ = logger.warn() << "kept " << 42;
/// assert!(out.contents().ends_with("] WARNING base: kept 42\n"));
/// ```
pub struct Logger<D = Stdout, B = bound::All> {
    verbosity: Level,
    style: LineStyle,
    destination: Option<D>,
    _bound: PhantomData<fn() -> B>,
}

impl Logger {
    /// Logger on stdout. Colors are on if stdout is a terminal.
    #[must_use]
    pub fn new(verbosity: Level) -> Self {
        let stdout = io::stdout();
        let colorize = ColorMode::Auto.resolve(&stdout);
        Self::from_parts(verbosity, colorize, Some(stdout))
    }

    /// Logger on stdout with an explicit colorize flag, even for non-terminal output.
    #[must_use]
    pub fn with_colorize(verbosity: Level, colorize: bool) -> Self {
        Self::from_parts(verbosity, colorize, Some(io::stdout()))
    }

    /// Starts from stdout at [`Level::Warn`] with colors detected from the terminal.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

impl<D, B> Logger<D, B> {
    pub(crate) fn from_parts(verbosity: Level, colorize: bool, destination: Option<D>) -> Self {
        Self {
            verbosity,
            style: LineStyle {
                colorize,
                ..LineStyle::default()
            },
            destination,
            _bound: PhantomData,
        }
    }

    pub(crate) fn style_mut(&mut self) -> &mut LineStyle {
        &mut self.style
    }

    /// Stores at most 31 characters and stops at the first NUL; the empty string removes the area from lines.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the name contains a line break before any NUL.
    pub fn set_area_name(&mut self, name: &str) -> Result<(), crate::Error> {
        self.style.area = AreaName::new(name)?;
        Ok(())
    }

    /// Current area, empty when lines carry none.
    #[must_use]
    pub fn area_name(&self) -> &str {
        self.style.area.as_str()
    }

    /// Character between hours, minutes and seconds.
    pub const fn set_time_separator(&mut self, separator: char) {
        self.style.time_separator = separator;
    }

    /// Separator used inside the `[HH:MM:SS]` stamp.
    #[must_use]
    pub const fn time_separator(&self) -> char {
        self.style.time_separator
    }

    /// Raising the verbosity above the static bound has no effect on emission;
    /// [`is_enabled`](Self::is_enabled) reports the combined state.
    pub const fn set_verbosity(&mut self, verbosity: Level) {
        self.verbosity = verbosity;
    }

    /// Run-time threshold, regardless of the static bound.
    #[must_use]
    pub const fn verbosity(&self) -> Level {
        self.verbosity
    }

    /// Canonical name of the run-time threshold, e.g. `"WARNING"`.
    #[must_use]
    pub const fn verbosity_str(&self) -> &'static str {
        self.verbosity.as_str()
    }

    /// Overrides the terminal detection done at construction.
    pub const fn set_colorize(&mut self, colorize: bool) {
        self.style.colorize = colorize;
    }

    /// Whether lines carry escape sequences.
    #[must_use]
    pub const fn colorize(&self) -> bool {
        self.style.colorize
    }

    /// Applies to lines opened after the call.
    pub const fn set_line_mode(&mut self, mode: LineMode) {
        self.style.mode = mode;
    }

    /// How pieces of a line reach the destination.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.style.mode
    }

    /// `None` for loggers built with [`LoggerBuilder::detached`].
    #[must_use]
    pub const fn destination(&self) -> Option<&D> {
        self.destination.as_ref()
    }
}

impl<D: Destination, B: StaticBound> Logger<D, B> {
    /// Ceiling fixed by the logger's type.
    #[must_use]
    pub const fn static_bound(&self) -> Level {
        B::LEVEL
    }

    /// Run-time form of the gate. Use it to skip building expensive values.
    #[must_use]
    #[inline]
    pub const fn is_enabled(&self, level: Level) -> bool {
        level::compiled_in(level) && level::is_enabled(B::LEVEL, self.verbosity, level)
    }

    /// Whether a line at `level` would reach the destination. Stricter than
    /// [`is_enabled`](Self::is_enabled): [`Level::Off`] is never written as a
    /// message, and a detached logger writes nothing.
    #[must_use]
    #[inline]
    pub const fn emits(&self, level: Level) -> bool {
        !matches!(level, Level::Off) && self.destination.is_some() && self.is_enabled(level)
    }

    /// Line at `level`, inert unless [`emits`](Self::emits) holds.
    #[inline]
    pub fn line(&self, level: Level) -> LineFormatter<'_, D> {
        match &self.destination {
            Some(destination) if self.emits(level) => {
                LineFormatter::open(destination, level, &self.style)
            }
            _ => LineFormatter::disabled(level),
        }
    }

    #[inline]
    pub fn trace(&self) -> LineFormatter<'_, D> {
        self.line(Level::Trace)
    }

    #[inline]
    pub fn debug(&self) -> LineFormatter<'_, D> {
        self.line(Level::Debug)
    }

    #[inline]
    pub fn info(&self) -> LineFormatter<'_, D> {
        self.line(Level::Info)
    }

    #[inline]
    pub fn warn(&self) -> LineFormatter<'_, D> {
        self.line(Level::Warn)
    }

    #[inline]
    pub fn error(&self) -> LineFormatter<'_, D> {
        self.line(Level::Error)
    }

    #[inline]
    pub fn fatal(&self) -> LineFormatter<'_, D> {
        self.line(Level::Fatal)
    }

    /// Runs `build` only if the line would be written, so nothing it formats is
    /// evaluated otherwise.
    ///
    /// # Errors
    /// I/O errors from the destination.
    pub fn log_with<F>(&self, level: Level, build: F) -> io::Result<()>
    where
        F: FnOnce(&mut LineFormatter<'_, D>),
    {
        if !self.emits(level) {
            return Ok(());
        }
        let mut line = self.line(level);
        build(&mut line);
        line.finish()
    }

    /// Writes `args` as the whole message of one line.
    ///
    /// # Errors
    /// I/O errors from the destination.
    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut line = self.line(level);
        line.push_args(args);
        line.finish()
    }

    /// Flushes the destination; a detached logger has nothing to flush.
    ///
    /// # Errors
    /// I/O errors from the destination.
    pub fn flush(&self) -> io::Result<()> {
        self.destination.as_ref().map_or(Ok(()), Destination::flush)
    }
}

impl<D, B: StaticBound> fmt::Debug for Logger<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity)
            .field("static_bound", &B::LEVEL)
            .field("colorize", &self.style.colorize)
            .field("area", &self.style.area.as_str())
            .field("time_separator", &self.style.time_separator)
            .field("line_mode", &self.style.mode)
            .field("attached", &self.destination.is_some())
            .finish()
    }
}
