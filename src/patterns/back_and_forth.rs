//! Back-and-forth pattern
//!
//! Fires when the three most recent spins go section A, section B, back to A.

use crate::models::{Analysis, PatternKind};
use crate::patterns::base::{Pattern, PatternContext};

pub struct BackAndForthPattern;

impl BackAndForthPattern {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BackAndForthPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for BackAndForthPattern {
    fn kind(&self) -> PatternKind {
        PatternKind::BackAndForth
    }

    fn description(&self) -> &'static str {
        "Section alternation A, B, A across the last three spins"
    }

    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        let middle = ctx.number(1)?;
        let a = ctx.tables.section(ctx.number(2)?);
        let b = ctx.tables.section(middle);
        let c = ctx.tables.section(ctx.number(0)?);

        if a != c || a == b {
            return None;
        }

        Some(Analysis::fired(
            PatternKind::BackAndForth,
            format!("Back-and-forth trigger! Alternating between {} and {}.", a, b),
            format!(
                "Bet on the region of {}, expecting a return to {}.",
                middle, b
            ),
            vec![middle],
        ))
    }
}
