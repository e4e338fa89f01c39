//! `HH:MM:SS` in, Berlin Uhr lamp grid out.

use crate::{
    core::{config::Config, error::InvalidTimeFormat, time::TimeOfDay},
    render::display::BerlinClockDisplay,
};

/// Anything that turns a textual time into a textual lamp grid.
pub trait TimeConverter {
    /// Returns the serialized grid, or an empty string when `time` is missing
    /// or not a valid `HH:MM:SS`.
    fn convert_time(&self, time: Option<&str>) -> String;
}

/// Parse `input` and build its display.
///
/// # Errors
///
/// * If `input` is empty, not shaped `HH:MM:SS`, or has a field out of range
pub fn convert(input: &str) -> Result<BerlinClockDisplay, InvalidTimeFormat> {
    let time = input.parse::<TimeOfDay>().inspect_err(|e| {
        log::debug!("convert: rejected {e}");
    })?;
    let display = BerlinClockDisplay::from_time(time);
    log::trace!("convert: {time} -> {display:?}");
    Ok(display)
}

/// Default converter.  Serializes with the configured line ending.
#[derive(Debug, Clone, Default)]
pub struct BerlinClockConverter {
    config: Config,
}

impl BerlinClockConverter {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl TimeConverter for BerlinClockConverter {
    fn convert_time(&self, time: Option<&str>) -> String {
        let Some(time) = time else {
            log::error!("Invalid time: no input");
            return String::new();
        };
        match convert(time) {
            Ok(display) => display.serialize(self.config.line_ending),
            Err(e) => {
                log::error!("Invalid time: {time}: {}", e.fault);
                String::new()
            }
        }
    }
}

/// Sentinel form of [`convert`]: empty string on any rejection.
#[must_use]
pub fn convert_time(time: Option<&str>) -> String {
    BerlinClockConverter::default().convert_time(time)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        config::LineEnding,
        error::{FormatFault, TimeField},
    };

    #[test_log::test]
    fn missing_input_is_empty() {
        assert_eq!(convert_time(None), "");
    }

    #[test_log::test]
    fn empty_input_is_empty() {
        assert_eq!(convert_time(Some("")), "");
        assert_eq!(convert("").unwrap_err().fault, FormatFault::Empty);
    }

    #[test_log::test]
    fn out_of_range_input_is_empty() {
        assert_eq!(convert_time(Some("25:60:60")), "");
        assert_eq!(
            convert("25:60:60").unwrap_err().fault,
            FormatFault::OutOfRange {
                field: TimeField::Hour,
                value: 25
            }
        );
    }

    #[test_log::test]
    fn seconds_lamp_on_for_even_second() {
        assert_eq!(
            convert_time(Some("13:00:00")),
            "Y\r\nRROO\r\nRRRO\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test_log::test]
    fn converter_uses_configured_line_ending() {
        let cfg = Config::builder().line_ending(LineEnding::Lf).build().unwrap();
        let conv = BerlinClockConverter::new(cfg);
        assert_eq!(
            conv.convert_time(Some("17:46:03")),
            "O\nRRRO\nRROO\nYYRYYRYYROO\nYOOO"
        );
    }

    #[test_log::test]
    fn repeated_calls_are_identical() {
        let a = convert_time(Some("08:23:17"));
        let b = convert_time(Some("08:23:17"));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test_log::test]
    fn hour_24_past_midnight_is_rejected() {
        assert_eq!(convert_time(Some("24:00:01")), "");
        assert!(convert("24:00:00").is_ok());
    }
}
