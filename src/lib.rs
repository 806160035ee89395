#![forbid(unsafe_code)]

//! `linelog` - lightweight severity-gated line logging.
//!
//! - Severity filtering with a static bound in the logger's type and a runtime threshold
//! - Trace and debug lines compiled out of release builds
//! - ANSI colorization, auto-detected from the destination
//! - `[HH:MM:SS] LEVEL area: message` line prefix
//!
//! # Example
//!
//! ```
//! use linelog::{Capture, Color, Level, Logger, info};
//!
//! let out = Capture::new();
//! let mut logger = Logger::builder()
//!     .verbosity(Level::Info)
//!     .colorize(false)
//!     .destination(out.clone())
//!     .build()
//!     .unwrap();
//! logger.set_area_name("main").unwrap();
//!
//! logger.trace().append("not printed");
//! logger.info().append("started in ").append(12).append("ms");
//! let _ = logger.warn() << "disk at " << Color::Red << 93 << "%";
//! info!(logger, "lazy: ", expensive());
//!
//! assert_eq!(out.lines().len(), 3);
//! # fn expensive() -> u32 { 1 }
//! ```
//!
//! A `<<` chain used as a statement triggers rustc's unused-operation lint;
//! bind it with `let _ =`, use the `append` methods, or use the macros.
//!
//! # Features
//!
//! - `debug-in-release`: keep trace and debug lines in builds without debug assertions

mod error;
mod macros;

pub mod config;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod line;
pub mod logger;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use fmt::{AREA_NAME_CAPACITY, Color, ColorMode, ColorToken};
pub use level::{Level, StaticBound, bound, level_from_name, level_name};
pub use line::{LineFormatter, LineMode};
pub use logger::{Logger, LoggerBuilder};
pub use output::{Capture, Destination};
