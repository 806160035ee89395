//! Pieces of the line prefix: palette and color tokens, timestamp, area name.

mod area;
mod color;
mod time;

pub use area::{AREA_NAME_CAPACITY, AreaName};
pub use color::{Color, ColorMode, ColorToken, RESET};
pub use time::Timestamp;
