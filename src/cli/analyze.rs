//! Analyze command - one-shot analysis of a spin sequence

use super::OutputSettings;
use anyhow::Result;
use roulette_analyst::{reporters, Analyst};
use tracing::info;

pub fn run(analyst: &mut Analyst, numbers: &[i64], output: OutputSettings) -> Result<()> {
    let accepted = numbers.iter().filter(|&&n| analyst.add(n)).count();
    info!(
        "Recorded {} of {} spins ({} kept)",
        accepted,
        numbers.len(),
        analyst.history().len()
    );

    let rendered = reporters::report(&analyst.report(), output.format, output.color)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
