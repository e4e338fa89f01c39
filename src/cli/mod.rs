mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ClockError;

/// Parse `std::env::args` and dispatch to the matching subcommand.
///
/// # Errors
///
/// * If a time is invalid (without `--lenient`), a colour or palette is
///   rejected, or stdin/stdout fail
pub fn run() -> Result<(), ClockError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Convert(a) => handlers::convert(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
