//! Centralised error types used across the crate.

use std::{fmt, io};

use thiserror::Error;

use crate::core::color::ColorError;

/// One of the three fields of `HH:MM:SS`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        })
    }
}

/// Why an input string was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatFault {
    Empty,
    /// Not shaped like `HH:MM:SS` (length, separators or non-digit bytes).
    Malformed,
    OutOfRange { field: TimeField, value: u8 },
}

impl fmt::Display for FormatFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("input is empty"),
            Self::Malformed => f.write_str("expected HH:MM:SS"),
            Self::OutOfRange { field, value } => write!(f, "{field} {value} is out of range"),
        }
    }
}

/// The only failure the converter knows about.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid time '{input}': {fault}")]
pub struct InvalidTimeFormat {
    pub input: String,
    pub fault: FormatFault,
}

impl InvalidTimeFormat {
    pub(crate) fn new(input: &str, fault: FormatFault) -> Self {
        Self {
            input: input.to_owned(),
            fault,
        }
    }
}

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("yellow and red lamps must use different colours")]
    IndistinctPalette,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    InvalidTime(#[from] InvalidTimeFormat),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
