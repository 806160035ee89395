//! Argument-list emission. Each macro checks [`Logger::emits`](crate::Logger::emits)
//! before evaluating any of its value expressions and writes the same bytes as
//! the `<<` chain would.

/// `emit!(logger, Level::Info, "a", 1, Color::Red, "b")`
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.emits(level) {
            #[allow(unused_mut)]
            let mut line = logger.line(level);
            $( line = line << $value; )*
            drop(line);
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Trace $(, $value)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Debug $(, $value)*)
    };
}

/// ```
/// use linelog::{Capture, Level, Logger, info};
///
/// let out = Capture::new();
/// let logger = Logger::builder()
///     .verbosity(Level::Info)
///     .colorize(false)
///     .destination(out.clone())
///     .build()
///     .unwrap();
/// info!(logger, "took ", 12, "ms");
/// assert!(out.contents().ends_with("INFO: took 12ms\n"));
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Error $(, $value)*)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::emit!($logger, $crate::Level::Fatal $(, $value)*)
    };
}
