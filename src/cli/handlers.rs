use std::{
    io::{BufRead, Write, stdin, stdout},
    time::Instant,
};

use crate::{
    core::{
        color::{AnsiCode, COLOR_NAMES, colorize},
        config::Config,
        error::ClockError,
        time::TimeOfDay,
    },
    render::Renderer,
};

use super::parse::ConvertArgs;

fn build_config(a: &ConvertArgs) -> Result<Config, ClockError> {
    let mut b = Config::builder()
        .line_ending(a.line_ending.into())
        .title_opt(a.title.as_deref());
    if let Some(c) = &a.yellow {
        b = b.yellow(AnsiCode::from_name(c)?);
    }
    if let Some(c) = &a.red {
        b = b.red(AnsiCode::from_name(c)?);
    }
    if let Some(c) = &a.off {
        b = b.off(AnsiCode::from_name(c)?);
    }
    Ok(b.build()?)
}

/// Stdin lines, skipping blanks and `#` comments.
fn read_stdin_times() -> Result<Vec<String>, ClockError> {
    let mut times = Vec::new();
    for line in stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        times.push(trimmed.to_owned());
    }
    Ok(times)
}

/// Render one input, or `None` when it is rejected in lenient mode.
fn render_one(
    input: &str,
    cfg: &Config,
    renderer: Renderer,
    lenient: bool,
) -> Result<Option<String>, ClockError> {
    match input.parse::<TimeOfDay>() {
        Ok(t) => Ok(Some(renderer.render(cfg, t))),
        Err(e) if lenient => {
            log::error!("Invalid time: {input}: {}", e.fault);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn convert(a: &ConvertArgs) -> Result<(), ClockError> {
    let cfg = build_config(a)?;
    let renderer = if a.pretty {
        Renderer::boxed()
    } else {
        Renderer::tokens()
    };
    let times = if a.reads_stdin() {
        read_stdin_times()?
    } else {
        a.times.clone()
    };

    let t0 = Instant::now();
    let sep = cfg.line_ending.as_str();
    let mut out = stdout().lock();

    for (i, input) in times.iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes())?;
        }
        let rendered = render_one(input, &cfg, renderer, a.lenient)?.unwrap_or_default();
        out.write_all(rendered.as_bytes())?;
        out.write_all(sep.as_bytes())?;
    }
    out.flush()?;

    log::debug!(
        "converted {} time(s) in {} µs",
        times.len(),
        t0.elapsed().as_micros()
    );
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for name in COLOR_NAMES {
        if let Ok(c) = AnsiCode::from_name(name) {
            println!("{}", colorize(&c, name));
        }
    }
    println!(
        "{}  (#ffbf00 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0xff, 0xbf, 0x00), "#ffbf00")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "berlin-clock";
    println!(
        "
Example invocations
-------------------
• Single time       : {bin} convert 13:17:01
• Several times     : {bin} convert 00:00:00 12:34:56 24:00:00
• From stdin        : printf '08:15:00\\n' | {bin} convert -
• Unix line endings : {bin} convert 13:17:01 --line-ending lf
• Framed lamps      : {bin} convert 13:17:01 --pretty
• Custom colors     : {bin} convert 13:17:01 --pretty --yellow yellow --red #c80000
• Keep going on junk: {bin} convert 25:60:60 10:00:00 --lenient
• Verbose logging   : RUST_LOG=debug {bin} convert 13:17:01
"
    );
}
