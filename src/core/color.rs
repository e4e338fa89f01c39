//! Zero-alloc ANSI colour wrapper used to light up lamps in the terminal.

use std::{fmt, str};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// Names accepted by [`AnsiCode::from_name`], in display order.
pub const COLOR_NAMES: [&str; 11] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "grey", "amber",
    "signal",
];

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[must_use]
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    #[must_use]
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    #[must_use]
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    #[must_use]
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    #[must_use]
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    #[must_use]
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    #[must_use]
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    #[must_use]
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    /// Dark grey, used for lamps that are switched off.
    #[must_use]
    pub const fn grey() -> Self {
        Self::Static("\x1b[90m")
    }
    /// Warm amber close to the real clock's yellow lenses.
    #[must_use]
    pub const fn amber() -> Self {
        Self::Static("\x1b[38;2;255;191;0m")
    }
    /// Signal red of the hour lamps and quarter markers.
    #[must_use]
    pub const fn signal_red() -> Self {
        Self::Static("\x1b[38;2;220;30;30m")
    }
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            // at most 19 bytes: prefix 7 + 3×3 digits + 2 separators + 'm'
            len: u8::try_from(len).unwrap_or(20),
        }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    ///
    /// * If the input is neither a known name nor a 6-digit hex colour
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "grey" | "gray" => Ok(Self::grey()),
            "amber" => Ok(Self::amber()),
            "signal" => Ok(Self::signal_red()),
            _ => Self::from_hex(s),
        }
    }

    /// # Errors
    ///
    /// * If the input is not six hex digits, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..usize::from(*len)]).unwrap_or(""),
        }
    }
}

impl str::FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}
