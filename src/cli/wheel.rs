//! Wheel command - inspect the lookup tables for one number

use super::OutputSettings;
use anyhow::Result;
use roulette_analyst::{reporters, WheelTables};

pub fn run(number: u8, output: OutputSettings) -> Result<()> {
    let tables = WheelTables::european()?;
    let rendered = reporters::number(&tables.view(number), output.format, output.color)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
