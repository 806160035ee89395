//! One log line, from prefix to terminator.
//!
//! A [`LineFormatter`] is created per emission call and owned by the call site.
//! Construction writes the prefix, appends write values, and dropping it (or
//! calling [`LineFormatter::finish`]) writes the suffix exactly once.

mod mode;

pub use mode::LineMode;

use crate::fmt::{AreaName, Color, ColorToken, RESET, Timestamp};
use crate::level::Level;
use crate::output::Destination;
use std::fmt::{self, Write as _};
use std::io;
use std::ops::Shl;

/// Formatting settings copied out of the logger when a line starts.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub colorize: bool,
    /// Printed after the level name when not empty.
    pub area: AreaName,
    pub time_separator: char,
    pub mode: LineMode,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            colorize: false,
            area: AreaName::default(),
            time_separator: ':',
            mode: LineMode::Immediate,
        }
    }
}

/// Builder for a single line.
///
/// Disabled formatters (level gated off, or no destination) accept every append
/// and write nothing. Not `Clone`: a line has exactly one owner.
///
/// On a colorized line the terminator is preceded by a reset whenever a color is
/// still in effect: a one-shot color that never got its value, or a sticky color
/// set with `!` or [`Color::persist`]. Colors therefore never carry over into the
/// next line.
pub struct LineFormatter<'a, D: Destination + ?Sized> {
    /// `None` while disabled and after the suffix has been written.
    sink: Option<&'a D>,
    level: Level,
    colorize: bool,
    mode: LineMode,
    /// A one-shot color token was written and the next value must be followed by a reset.
    pending_reset: bool,
    /// Some color is active on the destination and must be reset before the terminator.
    color_active: bool,
    buffer: String,
    error: Option<io::Error>,
}

impl<'a, D: Destination + ?Sized> LineFormatter<'a, D> {
    /// Opens a line on `sink` and writes its prefix.
    pub fn open(sink: &'a D, level: Level, style: &LineStyle) -> Self {
        let mut line = Self {
            sink: Some(sink),
            level,
            colorize: style.colorize,
            mode: style.mode,
            pending_reset: false,
            color_active: false,
            buffer: String::new(),
            error: None,
        };
        line.write_prefix(Timestamp::now(style.time_separator), &style.area);
        line
    }

    /// A formatter that discards everything.
    pub const fn disabled(level: Level) -> Self {
        Self {
            sink: None,
            level,
            colorize: false,
            mode: LineMode::Immediate,
            pending_reset: false,
            color_active: false,
            buffer: String::new(),
            error: None,
        }
    }

    /// `false` for lines that write nothing, either because the level was gated
    /// off or because the suffix has already been written.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Level this line was opened at, also for disabled lines.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Prefix pieces are assembled first and handed over in a single write.
    fn write_prefix(&mut self, time: Timestamp, area: &AreaName) {
        let color = if self.colorize {
            Color::for_level(self.level)
        } else {
            None
        };

        let mut prefix = String::with_capacity(48);
        if let Some(color) = color {
            prefix.push_str(color.ansi());
        }
        let _ = write!(prefix, "[{time}] {}", self.level.as_str());
        if !area.is_empty() {
            let _ = write!(prefix, " {area}");
        }
        prefix.push_str(": ");
        if color.is_some() {
            prefix.push_str(RESET);
        }
        self.put(&prefix);
    }

    /// Goes to the buffer in buffered mode, straight to the destination otherwise.
    /// The first I/O error is kept for [`finish`](Self::finish), later writes are skipped.
    fn put(&mut self, s: &str) {
        match self.mode {
            LineMode::Buffered => self.buffer.push_str(s),
            LineMode::Immediate => {
                if self.error.is_some() {
                    return;
                }
                if let Some(sink) = self.sink
                    && let Err(e) = sink.write_all(s.as_bytes())
                {
                    self.error = Some(e);
                }
            }
        }
    }

    /// Writes the `Display` text of `value`.
    pub fn push<T: fmt::Display + ?Sized>(&mut self, value: &T) -> &mut Self {
        if self.sink.is_some() {
            // Goes through `write_str` directly; `write_fmt` is reserved for callers.
            let _ = fmt::write(&mut *self, format_args!("{value}"));
            self.after_value();
        }
        self
    }

    /// Switches color, if this line is colorized.
    pub fn push_color(&mut self, token: impl Into<ColorToken>) -> &mut Self {
        if self.sink.is_some() && self.colorize {
            let token = token.into();
            self.put(token.color.ansi());
            self.pending_reset = token.resets_after_value();
            self.color_active = !matches!(token.color, Color::NoColor);
        }
        self
    }

    /// Chaining form of [`push`](Self::push).
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        self.push(&value);
        self
    }

    /// Chaining form of [`push_color`](Self::push_color).
    pub fn color(mut self, token: impl Into<ColorToken>) -> Self {
        self.push_color(token);
        self
    }

    /// Formatted arguments count as one value.
    pub fn push_args(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.push(&args)
    }

    fn after_value(&mut self) {
        if self.pending_reset {
            self.put(RESET);
            self.pending_reset = false;
            self.color_active = false;
        }
    }

    /// Writes the suffix and reports the first write error of this line.
    ///
    /// # Errors
    /// I/O errors from the destination.
    pub fn finish(mut self) -> io::Result<()> {
        self.close();
        self.error.take().map_or(Ok(()), Err)
    }

    /// Moves the formatter to its closed state. Taking the sink makes this run at most once.
    fn close(&mut self) {
        if self.sink.is_none() {
            return;
        }
        if self.colorize && (self.pending_reset || self.color_active) {
            self.put(RESET);
        }
        self.put("\n");
        let Some(sink) = self.sink.take() else {
            return;
        };
        if self.mode == LineMode::Buffered {
            let line = std::mem::take(&mut self.buffer);
            if let Err(e) = sink.write_all(line.as_bytes()) {
                self.error = Some(e);
            }
        }
        self.pending_reset = false;
        self.color_active = false;
    }
}

/// Lets `write!(line, "{:e}", x)` format with explicit specs. Format specs apply
/// to one argument only, so nothing carries over into the next line.
///
/// One `write!` call is one value: a pending one-shot color is reset right
/// after the whole formatted text.
impl<D: Destination + ?Sized> fmt::Write for LineFormatter<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.sink.is_some() {
            self.put(s);
        }
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.push_args(args);
        Ok(())
    }
}

impl<D: Destination + ?Sized> Drop for LineFormatter<'_, D> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<D: Destination + ?Sized> fmt::Debug for LineFormatter<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineFormatter")
            .field("enabled", &self.sink.is_some())
            .field("level", &self.level)
            .field("colorize", &self.colorize)
            .field("mode", &self.mode)
            .field("pending_reset", &self.pending_reset)
            .finish_non_exhaustive()
    }
}

/// `logger.info() << "x = " << x`
impl<D: Destination + ?Sized, T: fmt::Display> Shl<T> for LineFormatter<'_, D> {
    type Output = Self;

    fn shl(self, value: T) -> Self {
        self.append(value)
    }
}

/// `logger.info() << Color::Red << "red" << "plain"`
impl<D: Destination + ?Sized> Shl<Color> for LineFormatter<'_, D> {
    type Output = Self;

    fn shl(self, color: Color) -> Self {
        self.color(color)
    }
}

/// `logger.info() << !Color::Cyan << "cyan" << "still cyan"`
impl<D: Destination + ?Sized> Shl<ColorToken> for LineFormatter<'_, D> {
    type Output = Self;

    fn shl(self, token: ColorToken) -> Self {
        self.color(token)
    }
}
