//! Terminal renderer for a [`BerlinClockDisplay`]:
//! - `Tokens`: the bare `Y`/`R`/`O` rows joined by the configured line ending
//! - `Boxed`: coloured lamp glyphs, each row centred inside a titled frame

use crate::{
    core::{
        color::{AnsiCode, colorize},
        config::{Config, Palette},
        constants::FIVE_MINUTE_LAMPS,
        time::TimeOfDay,
    },
    render::{
        display::BerlinClockDisplay,
        lamp::{Lamp, LampColor, LampRow},
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;
/// Blank columns between the frame and the widest row
const SIDE_MARGIN: usize = 1;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

const LAMP_ON: &str = "●";
const LAMP_OFF: &str = "○";

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Visible columns taken by `lamps` glyphs separated by single spaces.
#[inline]
const fn row_width(lamps: usize) -> usize {
    (2 * lamps).saturating_sub(1)
}

#[inline]
fn lamp_glyph(lamp: Lamp, palette: &Palette) -> String {
    match lamp {
        Lamp::On(LampColor::Yellow) => colorize(&palette.yellow, LAMP_ON),
        Lamp::On(LampColor::Red) => colorize(&palette.red, LAMP_ON),
        Lamp::Off => colorize(&palette.off, LAMP_OFF),
    }
}

fn push_blank(buf: &mut String, inner: usize) {
    buf.push_str(V);
    buf.push_str(&" ".repeat(inner));
    buf.push_str(V);
    buf.push('\n');
}

fn push_row(buf: &mut String, row: &LampRow, inner: usize, palette: &Palette) {
    let width = row_width(row.lamps().len());
    let pad_left = (inner - width) / 2;
    let pad_right = inner - width - pad_left;

    buf.push_str(V);
    buf.push_str(&" ".repeat(pad_left));
    for (i, lamp) in row.lamps().iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        buf.push_str(&lamp_glyph(*lamp, palette));
    }
    buf.push_str(&" ".repeat(pad_right));
    buf.push_str(V);
    buf.push('\n');
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Strategy {
    /// Serialized lamp tokens only
    Tokens,
    /// Coloured glyphs inside a frame
    Boxed,
}

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    strat: Strategy,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn tokens() -> Self {
        Self {
            strat: Strategy::Tokens,
        }
    }
    #[inline]
    #[must_use]
    pub fn boxed() -> Self {
        Self {
            strat: Strategy::Boxed,
        }
    }

    /// Render `time` according to the strategy.  No trailing newline.
    #[must_use]
    pub fn render(&self, cfg: &Config, time: TimeOfDay) -> String {
        let display = BerlinClockDisplay::from_time(time);
        match self.strat {
            Strategy::Tokens => display.serialize(cfg.line_ending),
            Strategy::Boxed => {
                let title = cfg.title.clone().unwrap_or_else(|| time.to_string());
                Self::frame(cfg, &title, &display)
            }
        }
    }

    fn frame(cfg: &Config, title: &str, display: &BerlinClockDisplay) -> String {
        let inner = row_width(FIVE_MINUTE_LAMPS) + 2 * SIDE_MARGIN;
        let mut out = String::new();

        // --- top ---
        out.push_str(TL);
        push_centered(&mut out, title, inner, &cfg.palette.yellow);
        out.push_str(TR);
        out.push('\n');
        push_blank(&mut out, inner);

        // --- lamps ---
        for row in display.rows() {
            push_row(&mut out, row, inner, &cfg.palette);
        }

        // --- bottom ---
        push_blank(&mut out, inner);
        out.push_str(BL);
        out.push_str(&H.repeat(inner));
        out.push_str(BR);
        out
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render::lamp::RowKind;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test_log::test]
    fn tokens_strategy_is_the_serialized_form() {
        let cfg = Config::default();
        assert_eq!(
            Renderer::tokens().render(&cfg, time("13:00:00")),
            "Y\r\nRROO\r\nRRRO\r\nOOOOOOOOOOO\r\nOOOO"
        );
    }

    #[test_log::test]
    fn boxed_frame_has_fixed_geometry() {
        let out = Renderer::boxed().render(&Config::default(), time("10:31:00"));
        let lines: Vec<&str> = out.lines().collect();
        // border + blank + 5 rows + blank + border
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with(TL) && lines[0].ends_with(TR));
        assert!(lines[8].starts_with(BL) && lines[8].ends_with(BR));
        assert!(lines[0].contains("10:31:00"));
        assert!(!out.ends_with('\n'));
    }

    #[test_log::test]
    fn boxed_frame_lights_one_glyph_per_lit_lamp() {
        let t = time("19:47:12");
        let out = Renderer::boxed().render(&Config::default(), t);
        let lit: usize = BerlinClockDisplay::from_time(t)
            .rows()
            .iter()
            .map(LampRow::on_count)
            .sum();
        assert_eq!(out.matches(LAMP_ON).count(), lit);
        assert_eq!(out.matches(LAMP_OFF).count(), 24 - lit);
    }

    #[test_log::test]
    fn boxed_frame_prefers_configured_title() {
        let cfg = Config::builder().title("Fasanenstraße").build().unwrap();
        let out = Renderer::boxed().render(&cfg, time("06:00:00"));
        assert!(out.contains("Fasanenstraße"));
        assert!(!out.contains("06:00:00"));
    }

    #[test_log::test]
    fn rows_are_centred() {
        let inner = row_width(FIVE_MINUTE_LAMPS) + 2 * SIDE_MARGIN;
        let mut buf = String::new();
        let palette = Palette {
            yellow: AnsiCode::Static(""),
            red: AnsiCode::Static(""),
            off: AnsiCode::Static(""),
        };
        push_row(&mut buf, &LampRow::lit(RowKind::Seconds, 1), inner, &palette);
        let reset = AnsiCode::reset().as_str().to_owned();
        assert_eq!(
            buf,
            format!("{V}{}{LAMP_ON}{reset}{}{V}\n", " ".repeat(11), " ".repeat(11))
        );
    }
}
