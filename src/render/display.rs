//! The five-row Berlin Uhr face for one [`TimeOfDay`].

use std::fmt;

use crate::{
    core::{config::LineEnding, time::TimeOfDay},
    render::lamp::{LampRow, RowKind},
};

/// Seconds, two hour rows, two minute rows, in that order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BerlinClockDisplay {
    rows: [LampRow; 5],
}

impl BerlinClockDisplay {
    #[must_use]
    pub fn from_time(t: TimeOfDay) -> Self {
        let hour = usize::from(t.hour());
        let minute = usize::from(t.minute());
        let seconds_lit = usize::from(t.second() % 2 == 0);

        Self {
            rows: [
                LampRow::lit(RowKind::Seconds, seconds_lit),
                LampRow::lit(RowKind::FiveHours, hour / 5),
                LampRow::lit(RowKind::SingleHours, hour % 5),
                LampRow::lit(RowKind::FiveMinutes, minute / 5),
                LampRow::lit(RowKind::SingleMinutes, minute % 5),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[LampRow; 5] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn seconds(&self) -> &LampRow {
        &self.rows[0]
    }

    #[inline]
    #[must_use]
    pub fn hours(&self) -> (&LampRow, &LampRow) {
        (&self.rows[1], &self.rows[2])
    }

    #[inline]
    #[must_use]
    pub fn minutes(&self) -> (&LampRow, &LampRow) {
        (&self.rows[3], &self.rows[4])
    }

    /// Row tokens joined by `sep`, no trailing separator.
    #[must_use]
    pub fn serialize(&self, sep: LineEnding) -> String {
        self.rows
            .iter()
            .map(LampRow::tokens)
            .collect::<Vec<_>>()
            .join(sep.as_str())
    }
}

/// Canonical `\r\n`-separated form.
impl fmt::Display for BerlinClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(LineEnding::Crlf))
    }
}

impl From<TimeOfDay> for BerlinClockDisplay {
    fn from(t: TimeOfDay) -> Self {
        Self::from_time(t)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render::lamp::{Lamp, LampColor};

    fn display(s: &str) -> BerlinClockDisplay {
        BerlinClockDisplay::from_time(s.parse().unwrap())
    }

    #[test_log::test]
    fn thirteen_hundred_matches_reference_output() {
        assert_eq!(
            display("13:00:00").to_string(),
            "Y\r\nRROO\r\nRRRO\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test_log::test]
    fn lf_separator_is_honoured() {
        assert_eq!(
            display("23:59:59").serialize(LineEnding::Lf),
            "O\nRRRR\nRRRO\nYYRYYRYYRYY\nYYYY"
        );
    }

    #[test_log::test]
    fn midnight_variants() {
        assert_eq!(
            display("00:00:00").to_string(),
            "Y\r\nOOOO\r\nOOOO\r\nOOOOOOOOOOO\r\nOOOO"
        );
        assert_eq!(
            display("24:00:00").to_string(),
            "Y\r\nRRRR\r\nRRRR\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test_log::test]
    fn seconds_lamp_follows_parity() {
        for s in 0..60u8 {
            let t = TimeOfDay::new(12, 0, s).unwrap();
            let lamp = BerlinClockDisplay::from_time(t).seconds().lamps()[0];
            let expected = if s % 2 == 0 {
                Lamp::On(LampColor::Yellow)
            } else {
                Lamp::Off
            };
            assert_eq!(lamp, expected, "second {s}");
        }
    }

    #[test_log::test]
    fn lit_hour_lamps_add_up_to_the_hour() {
        for h in 0..=24u8 {
            let d = BerlinClockDisplay::from_time(TimeOfDay::new(h, 0, 0).unwrap());
            let (fives, ones) = d.hours();
            assert_eq!(5 * fives.on_count() + ones.on_count(), usize::from(h));
        }
    }

    #[test_log::test]
    fn lit_minute_lamps_add_up_and_mark_quarters() {
        for m in 0..60u8 {
            let d = BerlinClockDisplay::from_time(TimeOfDay::new(7, m, 0).unwrap());
            let (fives, ones) = d.minutes();
            assert_eq!(5 * fives.on_count() + ones.on_count(), usize::from(m));

            for (pos, lamp) in fives.lamps().iter().enumerate() {
                if lamp.is_on() && (pos + 1) % 3 == 0 {
                    assert_eq!(*lamp, Lamp::On(LampColor::Red), "minute {m} pos {pos}");
                }
            }
        }
    }

    #[test_log::test]
    fn lit_lamps_form_a_left_prefix() {
        let d = display("19:44:00");
        for row in d.rows() {
            let lamps = row.lamps();
            let lit = row.on_count();
            assert!(lamps[..lit].iter().all(|l| l.is_on()), "{:?}", row.kind());
            assert!(lamps[lit..].iter().all(|l| !l.is_on()), "{:?}", row.kind());
        }
    }
}
