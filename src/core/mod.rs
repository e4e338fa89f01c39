//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod time;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder, LineEnding, Palette};
pub use converter::{BerlinClockConverter, TimeConverter, convert, convert_time};
pub use error::{ClockError, ConfigError, FormatFault, InvalidTimeFormat, TimeField};
pub use time::TimeOfDay;
