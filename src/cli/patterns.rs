//! Patterns command - list enabled patterns in evaluation order

use super::OutputSettings;
use anyhow::Result;
use roulette_analyst::{reporters, PatternEngine};

pub fn run(engine: &PatternEngine, output: OutputSettings) -> Result<()> {
    let rendered = reporters::patterns(&engine.summaries(), output.format, output.color)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
