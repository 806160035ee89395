//! The level gate: a static bound picked with the logger's type, a runtime
//! threshold stored in the logger, and the release-build cut for trace/debug.
//!
//! Everything here is `const` so that, once the emission methods are inlined,
//! a statically excluded severity folds to `false` and the line disappears.

use super::Level;

/// Combined gate. The static bound can only restrict what the runtime threshold allows.
#[must_use]
#[inline]
pub const fn is_enabled(static_bound: Level, runtime_threshold: Level, level: Level) -> bool {
    static_bound.rank() <= level.rank() && runtime_threshold.rank() <= level.rank()
}

/// Trace and debug lines are compiled out of builds without debug assertions,
/// unless the `debug-in-release` feature asks to keep them.
#[must_use]
#[inline]
pub const fn compiled_in(level: Level) -> bool {
    if cfg!(any(debug_assertions, feature = "debug-in-release")) {
        true
    } else {
        level.rank() > Level::Debug.rank()
    }
}

/// Ceiling on the verbosity a logger type can ever emit, chosen through its type parameter.
pub trait StaticBound: Send + Sync + 'static {
    const LEVEL: Level;
}

/// Marker types for [`StaticBound`], one per [`Level`].
///
/// ```
/// use linelog::{Level, Logger};
/// use linelog::level::bound;
///
/// let logger = Logger::builder()
///     .verbosity(Level::All)
///     .colorize(false)
///     .bound::<bound::Info>()
///     .build()
///     .unwrap();
/// assert!(!logger.is_enabled(Level::Debug));
/// ```
pub mod bound {
    use super::{Level, StaticBound};

    macro_rules! bounds {
        ($($name:ident),* $(,)?) => {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
                pub struct $name;

                impl StaticBound for $name {
                    const LEVEL: Level = Level::$name;
                }
            )*
        };
    }

    bounds!(All, Trace, Debug, Info, Warn, Error, Fatal, Off);
}
