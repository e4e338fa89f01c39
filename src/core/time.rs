//! Strict `HH:MM:SS` parsing into a validated [`TimeOfDay`].
//!
//! Only the exact shape is accepted: eight ASCII bytes, two digits per field,
//! colons at offsets 2 and 5.  Range checks follow the byte checks, so a
//! lenient overflow such as `00:60:00` never rolls into the next hour.

use std::{fmt, str::FromStr};

use crate::core::{
    constants::{MAX_HOUR, MAX_MINUTE, MAX_SECOND, TIME_INPUT_LEN},
    error::{FormatFault, InvalidTimeFormat, TimeField},
};

/// A validated wall-clock time.  `24:00:00` is the only value with hour 24.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// * If any field is out of range, or hour is 24 with non-zero minute/second
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, FormatFault> {
        let check = |field: TimeField, value: u8, max: u8| {
            if value > max {
                Err(FormatFault::OutOfRange { field, value })
            } else {
                Ok(())
            }
        };
        check(TimeField::Hour, hour, MAX_HOUR)?;
        check(TimeField::Minute, minute, MAX_MINUTE)?;
        check(TimeField::Second, second, MAX_SECOND)?;

        if hour == MAX_HOUR && (minute, second) != (0, 0) {
            return Err(FormatFault::OutOfRange {
                field: TimeField::Hour,
                value: hour,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[inline]
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }
    #[inline]
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
    #[inline]
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }
}

// --- Helpers ---
#[inline]
fn parse_field(bytes: &[u8]) -> Result<u8, FormatFault> {
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(FormatFault::Malformed);
    }
    lexical_core::parse::<u8>(bytes).map_err(|_| FormatFault::Malformed)
}

fn parse_bytes(b: &[u8]) -> Result<TimeOfDay, FormatFault> {
    if b.is_empty() {
        return Err(FormatFault::Empty);
    }
    if b.len() != TIME_INPUT_LEN || b[2] != b':' || b[5] != b':' {
        return Err(FormatFault::Malformed);
    }
    let hour = parse_field(&b[0..2])?;
    let minute = parse_field(&b[3..5])?;
    let second = parse_field(&b[6..8])?;
    TimeOfDay::new(hour, minute, second)
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bytes(s.as_bytes()).map_err(|fault| InvalidTimeFormat::new(s, fault))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fault(s: &str) -> FormatFault {
        s.parse::<TimeOfDay>().unwrap_err().fault
    }

    #[test_log::test]
    fn parses_well_formed_time() {
        let t: TimeOfDay = "13:07:42".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (13, 7, 42));
        assert_eq!(t.to_string(), "13:07:42");
    }

    #[test_log::test]
    fn empty_input_is_its_own_fault() {
        assert_eq!(fault(""), FormatFault::Empty);
    }

    #[test_log::test]
    fn shape_violations_are_malformed() {
        for bad in [
            "1:00:00", "01:0:00", "01-00-00", "01:00:00 ", " 01:00:00", "0a:00:00", "+1:00:00",
            "01:00", "01:00:00:00", "１２:00:00",
        ] {
            assert_eq!(fault(bad), FormatFault::Malformed, "input {bad:?}");
        }
    }

    #[test_log::test]
    fn range_checks_report_first_offending_field() {
        assert_eq!(
            fault("25:60:60"),
            FormatFault::OutOfRange {
                field: TimeField::Hour,
                value: 25
            }
        );
        assert_eq!(
            fault("00:60:00"),
            FormatFault::OutOfRange {
                field: TimeField::Minute,
                value: 60
            }
        );
        assert_eq!(
            fault("23:59:60"),
            FormatFault::OutOfRange {
                field: TimeField::Second,
                value: 60
            }
        );
    }

    #[test_log::test]
    fn hour_24_is_only_valid_at_midnight() {
        assert!("24:00:00".parse::<TimeOfDay>().is_ok());
        for bad in ["24:00:01", "24:01:00", "24:59:59"] {
            assert_eq!(
                fault(bad),
                FormatFault::OutOfRange {
                    field: TimeField::Hour,
                    value: 24
                },
                "input {bad:?}"
            );
        }
    }

    #[test_log::test]
    fn error_keeps_the_rejected_input() {
        let err = "12:34".parse::<TimeOfDay>().unwrap_err();
        assert_eq!(err.input, "12:34");
        assert_eq!(err.to_string(), "invalid time '12:34': expected HH:MM:SS");
    }
}
