//! Terminal domination pattern
//!
//! Counts terminals over the last seven spins. Four hits is a trend to
//! follow through the horse triad; five or more is saturation, and the
//! disguised numbers of that terminal become the breakout target.

use crate::models::{join_numbers, Analysis, PatternKind};
use crate::patterns::base::{Pattern, PatternContext};

/// How many recent spins are counted
pub const DOMINATION_WINDOW: usize = 7;
/// Hits needed for a strong trend
pub const TREND_COUNT: usize = 4;
/// Hits needed for saturation
pub const SATURATION_COUNT: usize = 5;

pub struct TerminalDominationPattern;

impl TerminalDominationPattern {
    pub fn new() -> Self {
        Self
    }

    /// Most frequent terminal and its count; ties go to the digit reaching
    /// the maximum first in most-recent-first order
    pub fn dominant(terminals: &[u8]) -> Option<(u8, usize)> {
        let mut counts = [0usize; 10];
        for &t in terminals {
            counts[t as usize] += 1;
        }
        let mut best: Option<(u8, usize)> = None;
        for &t in terminals {
            let count = counts[t as usize];
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((t, count));
            }
        }
        best
    }
}

impl Default for TerminalDominationPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for TerminalDominationPattern {
    fn kind(&self) -> PatternKind {
        PatternKind::TerminalDomination
    }

    fn description(&self) -> &'static str {
        "One terminal dominates the last seven spins"
    }

    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        let terminals = ctx.terminals(DOMINATION_WINDOW);
        let (digit, count) = Self::dominant(&terminals)?;

        if count >= SATURATION_COUNT {
            let disguised = ctx.tables.disguised(digit);
            return Some(Analysis::fired(
                PatternKind::TerminalDomination,
                format!("T{} manipulation (SATURATED - {}x).", digit, count),
                format!(
                    "Bet on the BREAK. Focus on the disguised region: {{{}}}.",
                    join_numbers(disguised)
                ),
                disguised.iter().copied().collect(),
            ));
        }

        if count >= TREND_COUNT {
            let triad = ctx.tables.triad(digit);
            return Some(Analysis::fired(
                PatternKind::TerminalDomination,
                format!("Strong T{} manipulation.", digit),
                format!(
                    "Follow the trend. Focus on the triple horse region {{{}}}.",
                    join_numbers(&triad)
                ),
                triad.to_vec(),
            ));
        }

        None
    }
}
