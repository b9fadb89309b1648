//! False -> True pattern
//!
//! A two-digit number has a "false" terminal: the sum of its digits, mod 10.
//! When the previous spin's false terminal shows up as the real terminal of
//! the latest spin, the latest spin's own false terminal becomes the target.

use crate::models::{Analysis, PatternKind};
use crate::patterns::base::{Pattern, PatternContext};

pub struct FalseTruePattern;

impl FalseTruePattern {
    pub fn new() -> Self {
        Self
    }

    /// Digit-sum terminal, only defined for two-digit numbers
    pub fn false_value(n: u8) -> Option<u8> {
        (n >= 10).then(|| (n / 10 + n % 10) % 10)
    }
}

impl Default for FalseTruePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for FalseTruePattern {
    fn kind(&self) -> PatternKind {
        PatternKind::FalseTrue
    }

    fn description(&self) -> &'static str {
        "Previous spin's false terminal becomes the latest spin's real terminal"
    }

    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        let latest = ctx.number(0)?;
        let previous_false = Self::false_value(ctx.number(1)?)?;
        if previous_false != ctx.tables.terminal(latest) {
            return None;
        }
        let target = Self::false_value(latest)?;

        Some(Analysis::fired(
            PatternKind::FalseTrue,
            format!("False/True pattern active! {} is a false T{}.", latest, target),
            format!("Bet on the true Terminal {} region.", target),
            vec![target],
        ))
    }
}
