//! Session command - interactive spin entry
//!
//! Each line is one command: a number records a spin, `clear` empties the
//! history, `show` re-renders, `quit`/`exit` (or EOF) ends the session.
//! The report is re-rendered after every change.

use super::OutputSettings;
use anyhow::{Context, Result};
use roulette_analyst::{reporters, Analyst};
use std::io::{BufRead, Write};
use tracing::debug;

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Spin(i64),
    Clear,
    Show,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    if let Ok(n) = super::parse_spin(line) {
        return Input::Spin(n);
    }
    match line.to_lowercase().as_str() {
        "clear" | "c" => Input::Clear,
        "show" | "s" => Input::Show,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

fn render<W: Write>(analyst: &Analyst, out: &mut W, output: OutputSettings) -> Result<()> {
    let rendered = reporters::report(&analyst.report(), output.format, output.color)?;
    writeln!(out, "{}", rendered.trim_end()).context("Failed to write report")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    analyst: &mut Analyst,
    input: R,
    mut out: W,
    output: OutputSettings,
) -> Result<()> {
    render(analyst, &mut out, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_line(&line) {
            Input::Spin(n) => {
                // Out-of-range spins are ignored without a redraw
                if analyst.add(n) {
                    render(analyst, &mut out, output)?;
                }
            }
            Input::Clear => {
                analyst.clear();
                render(analyst, &mut out, output)?;
            }
            Input::Show => render(analyst, &mut out, output)?,
            Input::Quit => break,
            Input::Blank => {}
            Input::Unknown(text) => {
                debug!("Unrecognized session input: {}", text);
                writeln!(
                    out,
                    "Unrecognized input '{}'. Enter 0-36, 'clear', 'show' or 'quit'.",
                    text
                )
                .context("Failed to write output")?;
            }
        }
    }
    Ok(())
}
