//! Base pattern trait and evaluation context
//!
//! This module defines the core abstractions for pattern evaluation:
//! - `Pattern` trait that all patterns must implement
//! - `PatternContext` giving patterns read-only access to history and tables

use crate::history::History;
use crate::models::{Analysis, PatternKind};
use crate::wheel::WheelTables;

/// Read-only view handed to every pattern
#[derive(Clone, Copy)]
pub struct PatternContext<'a> {
    pub history: &'a History,
    pub tables: &'a WheelTables,
}

impl<'a> PatternContext<'a> {
    pub fn new(history: &'a History, tables: &'a WheelTables) -> Self {
        Self { history, tables }
    }

    /// Spin at `index` (0 = most recent)
    pub fn number(&self, index: usize) -> Option<u8> {
        self.history.get(index)
    }

    /// Terminal digit of the spin at `index`
    pub fn terminal(&self, index: usize) -> Option<u8> {
        self.number(index).map(|n| self.tables.terminal(n))
    }

    /// Terminal digits of the `limit` most recent spins, most recent first
    pub fn terminals(&self, limit: usize) -> Vec<u8> {
        self.history
            .iter()
            .take(limit)
            .map(|n| self.tables.terminal(n))
            .collect()
    }
}

/// Trait for all history patterns
///
/// A pattern inspects the current history and either fires, producing an
/// [`Analysis`], or stays silent. Patterns never mutate state.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct ZeroStreakPattern;
///
/// impl Pattern for ZeroStreakPattern {
///     fn kind(&self) -> PatternKind { PatternKind::FalseTrue }
///     fn description(&self) -> &'static str { "Fires after two zeros" }
///
///     fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis> {
///         None
///     }
/// }
/// ```
pub trait Pattern: Send + Sync {
    /// Which pattern this is
    fn kind(&self) -> PatternKind;

    /// Unique kebab-case identifier, used for skipping from config
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Human-readable description of the trigger
    fn description(&self) -> &'static str;

    /// Evaluate against the history, returning `Some` when the pattern fires
    fn evaluate(&self, ctx: &PatternContext) -> Option<Analysis>;
}
