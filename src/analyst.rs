//! The pattern analyst
//!
//! Owns the spin history and the lookup tables and exposes the three
//! operations a host shell needs: `add`, `clear` and `analyze`.

use crate::error::AnalystResult;
use crate::history::History;
use crate::models::{Analysis, SessionReport};
use crate::patterns::{PatternContext, PatternEngine};
use crate::wheel::{is_valid_number, WheelTables};
use tracing::debug;

/// Spins required before any pattern is evaluated
pub const MIN_HISTORY: usize = 5;

pub struct Analyst {
    tables: WheelTables,
    engine: PatternEngine,
    history: History,
}

impl Analyst {
    /// Create an analyst with the European tables and all built-in patterns
    pub fn new() -> AnalystResult<Self> {
        Ok(Self::with_engine(
            WheelTables::european()?,
            PatternEngine::default(),
        ))
    }

    pub fn with_engine(tables: WheelTables, engine: PatternEngine) -> Self {
        Self {
            tables,
            engine,
            history: History::new(),
        }
    }

    /// Record a spin. Values outside `0..=36` are ignored.
    ///
    /// Returns whether the value was recorded.
    pub fn add(&mut self, number: i64) -> bool {
        if !is_valid_number(number) {
            debug!("Ignoring out-of-range spin {}", number);
            return false;
        }
        self.history.push(number as u8);
        debug!("Recorded spin {} (history: {})", number, self.history);
        true
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} spins", self.history.len());
        self.history.clear();
    }

    /// Diagnosis and strategy for the current history
    pub fn analyze(&self) -> Analysis {
        if self.history.len() < MIN_HISTORY {
            return Analysis::insufficient_data();
        }
        let ctx = PatternContext::new(&self.history, &self.tables);
        self.engine
            .evaluate(&ctx)
            .unwrap_or_else(Analysis::no_pattern)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tables(&self) -> &WheelTables {
        &self.tables
    }

    /// History snapshot plus the current analysis
    pub fn report(&self) -> SessionReport {
        SessionReport {
            history: self.history.to_vec(),
            analysis: self.analyze(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;
    use crate::models::PatternKind;
    use crate::patterns::{Pattern, TerminalDominationPattern};

    fn analyst() -> Analyst {
        Analyst::new().expect("analyst")
    }

    /// Feed spins in the order they were spun
    fn spun(spins: &[i64]) -> Analyst {
        let mut a = analyst();
        for &n in spins {
            a.add(n);
        }
        a
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut a = spun(&[1, 2, 3]);
        let before = a.history().clone();
        for n in [-1, 37, 100, i64::MIN, i64::MAX] {
            assert!(!a.add(n));
            assert_eq!(a.history(), &before);
        }
        assert!(a.add(36));
        assert!(a.add(0));
    }

    #[test]
    fn test_history_is_bounded_and_ordered() {
        let spins: Vec<i64> = (0..45).map(|i| i % 37).collect();
        let a = spun(&spins);
        assert_eq!(a.history().len(), HISTORY_CAPACITY);
        let expected: Vec<u8> = spins
            .iter()
            .rev()
            .take(HISTORY_CAPACITY)
            .map(|&n| n as u8)
            .collect();
        assert_eq!(a.history().to_vec(), expected);
    }

    #[test]
    fn test_insufficient_data_below_five() {
        for len in 0..MIN_HISTORY {
            // 25, 23 would fire false-true with enough history
            let spins: Vec<i64> = [10, 20, 23, 25].iter().copied().take(len).collect();
            assert_eq!(spun(&spins).analyze(), Analysis::insufficient_data());
        }
    }

    #[test]
    fn test_clear_then_analyze() {
        let mut a = spun(&[3, 3, 3, 20, 10]);
        assert_ne!(a.analyze(), Analysis::insufficient_data());
        a.clear();
        assert!(a.history().is_empty());
        assert_eq!(a.analyze(), Analysis::insufficient_data());
    }

    #[test]
    fn test_double_half_example() {
        // Most recent first: 10, 20, 3, 3, 3
        let a = spun(&[3, 3, 3, 20, 10]);
        let analysis = a.analyze();
        assert_eq!(analysis.pattern, Some(PatternKind::DoubleHalf));
        assert_eq!(analysis.targets, vec![4, 5, 6, 19, 20, 21]);
    }

    #[test]
    fn test_horse_with_break_example() {
        // Terminals most recent first: 8, 4, 5
        let a = spun(&[30, 17, 5, 24, 18]);
        let analysis = a.analyze();
        assert_eq!(analysis.pattern, Some(PatternKind::HorseWithBreak));
        assert_eq!(analysis.targets, vec![1]);
        assert!(analysis.strategy.contains("Terminal 1"));
    }

    #[test]
    fn test_horse_outranks_terminal_domination() {
        // Terminals most recent first: 4, 8, 5, 5, 5, 5, 5
        let a = spun(&[5, 35, 25, 15, 5, 28, 34]);
        let ctx = PatternContext::new(a.history(), a.tables());
        let domination = TerminalDominationPattern.evaluate(&ctx).expect("domination holds");
        assert!(domination.diagnosis.contains("SATURATED"));

        let analysis = a.analyze();
        assert_eq!(analysis.pattern, Some(PatternKind::HorseWithBreak));
        assert_eq!(analysis.targets, vec![1]);
    }

    #[test]
    fn test_terminal_domination_tie_break() {
        // Terminals most recent first: 1, 1, 1, 1, 2, 2, 2
        let a = spun(&[12, 32, 22, 31, 11, 1, 21]);
        let analysis = a.analyze();
        assert_eq!(analysis.pattern, Some(PatternKind::TerminalDomination));
        assert_eq!(analysis.targets, vec![1, 4, 8]);
        assert!(analysis.strategy.contains("{1, 4, 8}"));
    }

    #[test]
    fn test_no_clear_pattern() {
        let a = spun(&[7, 16, 4, 36, 8]);
        assert_eq!(a.analyze(), Analysis::no_pattern());
    }

    #[test]
    fn test_analyze_does_not_mutate() {
        let a = spun(&[3, 3, 3, 20, 10]);
        let before = a.history().clone();
        let first = a.analyze();
        assert_eq!(a.analyze(), first);
        assert_eq!(a.history(), &before);
    }

    #[test]
    fn test_report_snapshot() {
        let a = spun(&[3, 3, 3, 20, 10]);
        let report = a.report();
        assert_eq!(report.history, vec![10, 20, 3, 3, 3]);
        assert_eq!(report.analysis, a.analyze());
    }
}
