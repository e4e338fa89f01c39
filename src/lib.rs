//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! let face = berlin_clock::convert("13:00:00").unwrap();
//! assert_eq!(face.to_string(), "Y\r\nRROO\r\nRRRO\r\nOOOOOOOOOOO\r\nOOOO");
//! assert_eq!(berlin_clock::convert_time(Some("25:60:60")), "");
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder, LineEnding, Palette},
    converter::{BerlinClockConverter, TimeConverter, convert, convert_time},
    error::{ClockError, ConfigError, FormatFault, InvalidTimeFormat, TimeField},
    time::TimeOfDay,
};

pub use crate::render::{BerlinClockDisplay, Lamp, LampColor, LampRow, Renderer, RowKind};
