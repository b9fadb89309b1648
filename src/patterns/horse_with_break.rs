//! Horse-with-break pattern
//!
//! The two most recent terminals form the lateral pair of a horse triad
//! while the spin before them broke out of that triad.

use crate::models::{Analysis, PatternKind};
use crate::patterns::base::{Pattern, PatternContext};

pub struct HorseWithBreakPattern;

impl HorseWithBreakPattern {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HorseWithBreakPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for HorseWithBreakPattern {
    fn kind(&self) -> PatternKind {
        PatternKind::HorseWithBreak
    }

    fn description(&self) -> &'static str {
        "Last two terminals are horse laterals and the spin before broke the triad"
    }

    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        let newest = ctx.terminal(0)?;
        let second = ctx.terminal(1)?;
        let breaker = ctx.number(2)?;
        let break_terminal = ctx.terminal(2)?;

        let central = ctx.tables.central_for(newest, second)?;
        let (low, high) = (newest.min(second), newest.max(second));
        let trinity = [low, high, central];
        if trinity.contains(&break_terminal) {
            return None;
        }

        Some(Analysis::fired(
            PatternKind::HorseWithBreak,
            format!(
                "Horse pattern with break! Pair ({}, {}) after a break on {}.",
                low, high, breaker
            ),
            format!("Bet on the Terminal {} region for 2 spins.", central),
            vec![central],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_support::{context_for, history_of};
    use crate::wheel::WheelTables;

    #[test]
    fn test_fires_when_third_breaks_triad() {
        let tables = WheelTables::european().expect("tables");
        // Spun 5, then 4, then 8
        let history = history_of(&[8, 4, 5]);
        let ctx = context_for(&history, &tables);

        let analysis = HorseWithBreakPattern.evaluate(&ctx).expect("pattern fires");
        assert_eq!(analysis.pattern, Some(PatternKind::HorseWithBreak));
        assert_eq!(analysis.targets, vec![1]);
        assert!(analysis.diagnosis.contains("(4, 8)"));
        assert!(analysis.strategy.contains("Terminal 1"));
    }

    #[test]
    fn test_silent_when_third_inside_triad() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[18, 24, 21]);
        let ctx = context_for(&history, &tables);
        assert!(HorseWithBreakPattern.evaluate(&ctx).is_none());
    }

    #[test]
    fn test_silent_for_unknown_pair() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[12, 11, 5]);
        let ctx = context_for(&history, &tables);
        assert!(HorseWithBreakPattern.evaluate(&ctx).is_none());
    }

    #[test]
    fn test_needs_three_spins() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[8, 4]);
        let ctx = context_for(&history, &tables);
        assert!(HorseWithBreakPattern.evaluate(&ctx).is_none());
    }
}
