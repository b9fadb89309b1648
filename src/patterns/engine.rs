//! Ordered pattern evaluation
//!
//! The PatternEngine walks its registered patterns in priority order and
//! stops at the first one that fires. Registration order is the only
//! tie-break: once a pattern fires, nothing after it is evaluated.

use crate::error::{AnalystError, AnalystResult};
use crate::models::{Analysis, PatternKind, PatternSummary};
use crate::patterns::base::{Pattern, PatternContext};
use crate::patterns::{
    BackAndForthPattern, DoubleHalfPattern, FalseTruePattern, HorseWithBreakPattern,
    TerminalDominationPattern,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Create the built-in patterns in priority order (highest first)
pub fn default_patterns() -> Vec<Arc<dyn Pattern>> {
    vec![
        Arc::new(DoubleHalfPattern::new()),
        Arc::new(HorseWithBreakPattern::new()),
        Arc::new(BackAndForthPattern::new()),
        Arc::new(FalseTruePattern::new()),
        Arc::new(TerminalDominationPattern::new()),
    ]
}

/// Evaluates patterns in priority order
pub struct PatternEngine {
    /// Registered patterns, highest priority first
    patterns: Vec<Arc<dyn Pattern>>,
}

impl PatternEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Register a pattern with lower priority than those already registered
    pub fn register(&mut self, pattern: Arc<dyn Pattern>) {
        debug!("Registered pattern: {}", pattern.name());
        self.patterns.push(pattern);
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// Name and description of each pattern, highest priority first
    pub fn summaries(&self) -> Vec<PatternSummary> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| PatternSummary {
                priority: i + 1,
                name: p.name(),
                description: p.description(),
            })
            .collect()
    }

    /// Return the analysis of the first pattern that fires
    pub fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
        for pattern in &self.patterns {
            match pattern.evaluate(ctx) {
                Some(analysis) => {
                    debug!("Pattern {} fired: {}", pattern.name(), analysis.diagnosis);
                    return Some(analysis);
                }
                None => trace!("Pattern {} silent", pattern.name()),
            }
        }
        None
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        PatternEngineBuilder::new().build()
    }
}

/// Builder for PatternEngine with fluent API
pub struct PatternEngineBuilder {
    patterns: Vec<Arc<dyn Pattern>>,
    skip: Vec<PatternKind>,
}

impl PatternEngineBuilder {
    /// Start from the built-in patterns
    pub fn new() -> Self {
        Self {
            patterns: default_patterns(),
            skip: Vec::new(),
        }
    }

    /// Start with no patterns registered
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            skip: Vec::new(),
        }
    }

    /// Append a pattern at the lowest priority
    pub fn pattern(mut self, pattern: Arc<dyn Pattern>) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Skip patterns by name, failing on names that match no pattern
    pub fn skip_named<S: AsRef<str>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> AnalystResult<Self> {
        for name in names {
            let name = name.as_ref();
            let kind = PatternKind::from_name(name)
                .ok_or_else(|| AnalystError::UnknownPattern(name.to_string()))?;
            self.skip.push(kind);
        }
        Ok(self)
    }

    pub fn build(self) -> PatternEngine {
        let mut engine = PatternEngine::new();
        for pattern in self.patterns {
            if self.skip.contains(&pattern.kind()) {
                debug!("Skipping pattern: {}", pattern.name());
                continue;
            }
            engine.register(pattern);
        }
        engine
    }
}

impl Default for PatternEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_support::{context_for, history_of};
    use crate::wheel::WheelTables;

    // Mock pattern for testing
    struct MockPattern {
        kind: PatternKind,
        fires: bool,
    }

    impl Pattern for MockPattern {
        fn kind(&self) -> PatternKind {
            self.kind
        }

        fn description(&self) -> &'static str {
            "Mock pattern for testing"
        }

        fn evaluate(&self, _ctx: &PatternContext) -> Option<Analysis> {
            self.fires.then(|| {
                Analysis::fired(self.kind, "mock".to_string(), "mock".to_string(), vec![])
            })
        }
    }

    #[test]
    fn test_default_order() {
        let engine = PatternEngine::default();
        assert_eq!(
            engine.pattern_names(),
            vec![
                "double-half",
                "horse-with-break",
                "back-and-forth",
                "false-true",
                "terminal-domination"
            ]
        );
    }

    #[test]
    fn test_first_firing_pattern_wins() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[1, 2, 3, 4, 5]);
        let ctx = context_for(&history, &tables);

        let engine = PatternEngineBuilder::empty()
            .pattern(Arc::new(MockPattern { kind: PatternKind::FalseTrue, fires: false }))
            .pattern(Arc::new(MockPattern { kind: PatternKind::BackAndForth, fires: true }))
            .pattern(Arc::new(MockPattern { kind: PatternKind::DoubleHalf, fires: true }))
            .build();

        let analysis = engine.evaluate(&ctx).expect("a pattern fires");
        assert_eq!(analysis.pattern, Some(PatternKind::BackAndForth));
    }

    #[test]
    fn test_no_patterns_is_silent() {
        let tables = WheelTables::european().expect("tables");
        let history = history_of(&[1, 2, 3, 4, 5]);
        let ctx = context_for(&history, &tables);
        assert!(PatternEngineBuilder::empty().build().evaluate(&ctx).is_none());
    }

    #[test]
    fn test_summaries_follow_priority() {
        let engine = PatternEngineBuilder::new()
            .skip_named(["horse-with-break"])
            .expect("known name")
            .build();
        let summaries = engine.summaries();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].priority, 1);
        assert_eq!(summaries[0].name, "double-half");
        assert_eq!(summaries[1].name, "back-and-forth");
        assert_eq!(summaries[1].priority, 2);
        assert!(summaries.iter().all(|s| !s.description.is_empty()));
    }

    #[test]
    fn test_skip_named() {
        let engine = PatternEngineBuilder::new()
            .skip_named(["double_half", "false-true"])
            .expect("known names")
            .build();
        assert_eq!(engine.pattern_count(), 3);
        assert!(!engine.pattern_names().contains(&"double-half"));

        let err = PatternEngineBuilder::new().skip_named(["martingale"]);
        assert!(matches!(err, Err(AnalystError::UnknownPattern(name)) if name == "martingale"));
    }
}
