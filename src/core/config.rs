//! Run-time configuration object + fluent builder.

use crate::core::{color::AnsiCode, error::ConfigError};

/// Separator placed between serialized lamp rows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineEnding {
    /// `\r\n`, the canonical serialized form.
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Colours used by the terminal renderer for each lamp state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub yellow: AnsiCode,
    pub red: AnsiCode,
    pub off: AnsiCode,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            yellow: AnsiCode::amber(),
            red: AnsiCode::signal_red(),
            off: AnsiCode::grey(),
        }
    }
}

/// Immutable parameters handed to the converter and renderer.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub line_ending: LineEnding,
    pub palette: Palette,
    /// Heading for the boxed rendering; the converted time when `None`.
    pub title: Option<String>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    line_ending: Option<LineEnding>,
    yellow: Option<AnsiCode>,
    red: Option<AnsiCode>,
    off: Option<AnsiCode>,
    title: Option<String>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn line_ending(mut self, e: LineEnding) -> Self {
        self.line_ending = Some(e);
        self
    }
    #[inline]
    #[must_use]
    pub fn yellow(mut self, c: AnsiCode) -> Self {
        self.yellow = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn red(mut self, c: AnsiCode) -> Self {
        self.red = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn off(mut self, c: AnsiCode) -> Self {
        self.off = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }

    /// # Errors
    ///
    /// * If yellow and red lamps end up with the same colour
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Palette::default();
        let palette = Palette {
            yellow: self.yellow.unwrap_or(defaults.yellow),
            red: self.red.unwrap_or(defaults.red),
            off: self.off.unwrap_or(defaults.off),
        };
        if palette.yellow == palette.red {
            return Err(ConfigError::IndistinctPalette);
        }
        Ok(Config {
            line_ending: self.line_ending.unwrap_or_default(),
            palette,
            title: self.title,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
