//! Lamps, row kinds and the contiguous-prefix fill rule.
//!
//! Every row lights its lamps strictly left to right: a count of `n` means the
//! first `n` lamps are on and the rest are off.  The row kind decides how long
//! the row is and which colour a lit lamp at a given position shows.

use std::fmt;

use crate::core::constants::{
    FIVE_HOUR_LAMPS, FIVE_MINUTE_LAMPS, OFF_TOKEN, QUARTER_MARKER_STRIDE, RED_TOKEN,
    SECONDS_LAMPS, SINGLE_HOUR_LAMPS, SINGLE_MINUTE_LAMPS, YELLOW_TOKEN,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LampColor {
    Yellow,
    Red,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Lamp {
    On(LampColor),
    Off,
}

impl Lamp {
    #[inline]
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On(_))
    }

    /// Serialized token: `Y`, `R` or `O`.
    #[inline]
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::On(LampColor::Yellow) => YELLOW_TOKEN,
            Self::On(LampColor::Red) => RED_TOKEN,
            Self::Off => OFF_TOKEN,
        }
    }
}

/// The five rows of the clock, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RowKind {
    Seconds,
    FiveHours,
    SingleHours,
    FiveMinutes,
    SingleMinutes,
}

impl RowKind {
    pub const ALL: [Self; 5] = [
        Self::Seconds,
        Self::FiveHours,
        Self::SingleHours,
        Self::FiveMinutes,
        Self::SingleMinutes,
    ];

    #[inline]
    #[must_use]
    pub const fn lamp_count(self) -> usize {
        match self {
            Self::Seconds => SECONDS_LAMPS,
            Self::FiveHours => FIVE_HOUR_LAMPS,
            Self::SingleHours => SINGLE_HOUR_LAMPS,
            Self::FiveMinutes => FIVE_MINUTE_LAMPS,
            Self::SingleMinutes => SINGLE_MINUTE_LAMPS,
        }
    }

    /// Colour of a lit lamp at 0-indexed `pos`.
    #[must_use]
    pub const fn on_color(self, pos: usize) -> LampColor {
        match self {
            Self::FiveHours | Self::SingleHours => LampColor::Red,
            Self::FiveMinutes if (pos + 1) % QUARTER_MARKER_STRIDE == 0 => LampColor::Red,
            Self::Seconds | Self::FiveMinutes | Self::SingleMinutes => LampColor::Yellow,
        }
    }
}

/// A fixed-length row whose lit lamps form a left prefix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LampRow {
    kind: RowKind,
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// Light the first `count` lamps of a `kind` row.  `count` is clamped to
    /// the row length.
    #[must_use]
    pub fn lit(kind: RowKind, count: usize) -> Self {
        let lamps = (0..kind.lamp_count())
            .map(|pos| {
                if pos < count {
                    Lamp::On(kind.on_color(pos))
                } else {
                    Lamp::Off
                }
            })
            .collect();
        Self { kind, lamps }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> RowKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    #[inline]
    #[must_use]
    pub fn on_count(&self) -> usize {
        self.lamps.iter().filter(|l| l.is_on()).count()
    }

    #[must_use]
    pub fn tokens(&self) -> String {
        self.lamps.iter().map(|l| l.token()).collect()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens())
    }
}
