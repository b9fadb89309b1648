//! Double/Half pattern
//!
//! Fires when some consecutive pair in the history shows one spin landing
//! roughly double or roughly half of the spin before it. The betting region
//! is then computed from the most recent spin.

use crate::models::{join_numbers, Analysis, PatternKind};
use crate::patterns::base::{Pattern, PatternContext};
use crate::wheel::MAX_NUMBER;
use std::collections::BTreeSet;

pub struct DoubleHalfPattern;

impl DoubleHalfPattern {
    pub fn new() -> Self {
        Self
    }

    /// `newer` is within 1 of `2 * older` or of the floor half of `older`
    pub fn is_trigger(older: u8, newer: u8) -> bool {
        let (older, newer) = (i32::from(older), i32::from(newer));
        (newer - 2 * older).abs() <= 1 || (newer - older / 2).abs() <= 1
    }

    /// Scan from the oldest pair toward the newest, returning the first
    /// trigger as `(older, newer)`
    pub fn find_trigger(ctx: &PatternContext) -> Option<(u8, u8)> {
        (1..ctx.history.len()).rev().find_map(|i| {
            let older = ctx.number(i)?;
            let newer = ctx.number(i - 1)?;
            Self::is_trigger(older, newer).then_some((older, newer))
        })
    }

    /// Exact double and floor half of `n`, each widened by one, clipped to the wheel
    pub fn targets(n: u8) -> BTreeSet<u8> {
        let n = i32::from(n);
        [n * 2, n / 2]
            .into_iter()
            .flat_map(|center| center - 1..=center + 1)
            .filter(|t| (0..=i32::from(MAX_NUMBER)).contains(t))
            .map(|t| t as u8)
            .collect()
    }
}

impl Default for DoubleHalfPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for DoubleHalfPattern {
    fn kind(&self) -> PatternKind {
        PatternKind::DoubleHalf
    }

    fn description(&self) -> &'static str {
        "A spin lands about double or half of the previous one"
    }

    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        let (older, newer) = Self::find_trigger(ctx)?;
        let current = ctx.number(0)?;
        let targets = Self::targets(current);
        if targets.is_empty() {
            return None;
        }

        Some(Analysis::fired(
            PatternKind::DoubleHalf,
            format!("Double/Half pattern active (seen: {} -> {}).", older, newer),
            format!(
                "Working from {}, bet on the region of targets: {{{}}}.",
                current,
                join_numbers(&targets)
            ),
            targets.into_iter().collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_support::{context_for, history_of};
    use crate::wheel::WheelTables;

    #[test]
    fn test_trigger_condition() {
        assert!(DoubleHalfPattern::is_trigger(20, 10));
        assert!(DoubleHalfPattern::is_trigger(20, 11));
        assert!(DoubleHalfPattern::is_trigger(7, 15));
        assert!(DoubleHalfPattern::is_trigger(7, 13));
        assert!(DoubleHalfPattern::is_trigger(7, 4));
        assert!(DoubleHalfPattern::is_trigger(9, 3));
        assert!(DoubleHalfPattern::is_trigger(7, 2));
        assert!(DoubleHalfPattern::is_trigger(5, 1));
        assert!(!DoubleHalfPattern::is_trigger(3, 3));
        assert!(!DoubleHalfPattern::is_trigger(7, 5));
        assert!(!DoubleHalfPattern::is_trigger(20, 12));
    }

    #[test]
    fn test_targets_clip_to_wheel() {
        let targets: Vec<u8> = DoubleHalfPattern::targets(10).into_iter().collect();
        assert_eq!(targets, vec![4, 5, 6, 19, 20, 21]);

        let targets: Vec<u8> = DoubleHalfPattern::targets(30).into_iter().collect();
        assert_eq!(targets, vec![14, 15, 16]);

        let targets: Vec<u8> = DoubleHalfPattern::targets(0).into_iter().collect();
        assert_eq!(targets, vec![0, 1]);
    }

    #[test]
    fn test_fires_on_half_trigger() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[10, 20, 3, 3, 3]);
        let ctx = context_for(&history, &tables);

        assert_eq!(DoubleHalfPattern::find_trigger(&ctx), Some((20, 10)));
        let analysis = DoubleHalfPattern.evaluate(&ctx).expect("pattern fires");
        assert_eq!(analysis.pattern, Some(PatternKind::DoubleHalf));
        assert_eq!(analysis.targets, vec![4, 5, 6, 19, 20, 21]);
        assert!(analysis.diagnosis.contains("20 -> 10"));
        assert!(analysis.strategy.contains("{4, 5, 6, 19, 20, 21}"));
    }

    #[test]
    fn test_fires_on_floor_half_of_odd_spin() {
        let tables = WheelTables::european().expect("tables");
        // 9 then 3: floor half of 9 is 4
        let history = history_of(&[3, 9, 30, 30, 30]);
        let ctx = context_for(&history, &tables);

        assert_eq!(DoubleHalfPattern::find_trigger(&ctx), Some((9, 3)));
        let analysis = DoubleHalfPattern.evaluate(&ctx).expect("pattern fires");
        assert_eq!(analysis.pattern, Some(PatternKind::DoubleHalf));
        assert_eq!(analysis.targets, vec![0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn test_scan_prefers_oldest_trigger() {
        let tables = WheelTables::european().expect("tables");
        // 9 -> 18 is older than 20 -> 10
        let history = history_of(&[10, 20, 18, 9, 33]);
        let ctx = context_for(&history, &tables);
        assert_eq!(DoubleHalfPattern::find_trigger(&ctx), Some((9, 18)));
    }

    #[test]
    fn test_silent_without_trigger() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[5, 17, 3, 3, 3]);
        let ctx = context_for(&history, &tables);
        assert!(DoubleHalfPattern.evaluate(&ctx).is_none());
    }
}
