//! Wall-clock stamp at the start of every line.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;

/// Hour, minute and second of a line, rendered two-digit with a configurable separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    hour: u32,
    minute: u32,
    second: u32,
    separator: char,
}

impl Timestamp {
    /// Local time right now. Not cached: each line reflects its own construction time.
    #[must_use]
    pub fn now(separator: char) -> Self {
        Self::from_time(Local::now().time(), separator)
    }

    #[must_use]
    pub fn from_time(time: NaiveTime, separator: char) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            separator,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.separator;
        write!(
            f,
            "{:02}{sep}{:02}{sep}{:02}",
            self.hour, self.minute, self.second
        )
    }
}
