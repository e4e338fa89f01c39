use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::LineEnding;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "berlin-clock",
    about = "Show HH:MM:SS times as Berlin Uhr lamp rows"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one or more times
    Convert(ConvertArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum LineEndingArg {
    #[default]
    Crlf,
    Lf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(a: LineEndingArg) -> Self {
        match a {
            LineEndingArg::Crlf => Self::Crlf,
            LineEndingArg::Lf => Self::Lf,
        }
    }
}

/// `berlin-clock convert …`
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Times as HH:MM:SS (read one per line from stdin when omitted or `-`)
    #[arg(value_name = "TIME")]
    pub times: Vec<String>,

    /// Draw coloured lamps in a frame instead of Y/R/O tokens
    #[arg(short, long)]
    pub pretty: bool,

    /// Separator between lamp rows
    #[arg(long, value_enum, default_value_t = LineEndingArg::Crlf)]
    pub line_ending: LineEndingArg,

    /// Print an empty entry for invalid times instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Frame title for `--pretty` (defaults to the time itself)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Color of yellow lamps (name or `#RRGGBB`)
    #[arg(long)]
    pub yellow: Option<String>,
    /// Color of red lamps (name or `#RRGGBB`)
    #[arg(long)]
    pub red: Option<String>,
    /// Color of switched-off lamps (name or `#RRGGBB`)
    #[arg(long)]
    pub off: Option<String>,
}

impl ConvertArgs {
    /// True when the times should come from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.times.is_empty() || (self.times.len() == 1 && self.times[0] == "-")
    }
}
