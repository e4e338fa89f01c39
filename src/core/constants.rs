//! A collection of constants.

/// Single blinking lamp on top of the clock
pub const SECONDS_LAMPS: usize = 1;
/// Each lamp in the first hour row is worth five hours
pub const FIVE_HOUR_LAMPS: usize = 4;
/// Each lamp in the second hour row is worth one hour
pub const SINGLE_HOUR_LAMPS: usize = 4;
/// Each lamp in the first minute row is worth five minutes
pub const FIVE_MINUTE_LAMPS: usize = 11;
/// Each lamp in the second minute row is worth one minute
pub const SINGLE_MINUTE_LAMPS: usize = 4;

/// Every third lamp of the five-minute row marks a quarter hour.
pub const QUARTER_MARKER_STRIDE: usize = 3;

/// Lamp tokens used in the serialized form
pub const YELLOW_TOKEN: char = 'Y';
pub const RED_TOKEN: char = 'R';
pub const OFF_TOKEN: char = 'O';

/// Exact byte length of `HH:MM:SS`.
pub const TIME_INPUT_LEN: usize = 8;

pub const MAX_HOUR: u8 = 24;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;
