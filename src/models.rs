//! Core data models for the analyst
//!
//! These models are shared by the pattern engine, the reporters and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wheel section a pocket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Voisins,
    Tiers,
    Orphelins,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Voisins => write!(f, "Voisins"),
            Section::Tiers => write!(f, "Tiers"),
            Section::Orphelins => write!(f, "Orphelins"),
        }
    }
}

/// Per-number metadata derived from the lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberInfo {
    pub terminal: u8,
    pub section: Section,
}

/// Which pattern produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    DoubleHalf,
    HorseWithBreak,
    BackAndForth,
    FalseTrue,
    TerminalDomination,
}

impl PatternKind {
    /// All patterns in evaluation priority order (highest first)
    pub const ALL: [PatternKind; 5] = [
        PatternKind::DoubleHalf,
        PatternKind::HorseWithBreak,
        PatternKind::BackAndForth,
        PatternKind::FalseTrue,
        PatternKind::TerminalDomination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::DoubleHalf => "double-half",
            PatternKind::HorseWithBreak => "horse-with-break",
            PatternKind::BackAndForth => "back-and-forth",
            PatternKind::FalseTrue => "false-true",
            PatternKind::TerminalDomination => "terminal-domination",
        }
    }

    /// Parse a pattern name, accepting snake_case and kebab-case
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|k| k.name() == normalized)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnosis/strategy pair produced for one history state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub diagnosis: String,
    pub strategy: String,
    /// Pattern that fired, `None` for the fixed fallback pairs
    #[serde(default)]
    pub pattern: Option<PatternKind>,
    /// Numbers or terminal digits named by the strategy
    #[serde(default)]
    pub targets: Vec<u8>,
}

impl Analysis {
    pub const INSUFFICIENT_DIAGNOSIS: &'static str = "Waiting for more numbers...";
    pub const INSUFFICIENT_STRATEGY: &'static str = "Enter at least 5 numbers.";
    pub const NO_PATTERN_DIAGNOSIS: &'static str = "No clear pattern identified.";
    pub const NO_PATTERN_STRATEGY: &'static str = "Wait for a trigger.";

    /// Create an analysis for a pattern that fired
    pub fn fired(
        pattern: PatternKind,
        diagnosis: String,
        strategy: String,
        targets: Vec<u8>,
    ) -> Self {
        Self {
            diagnosis,
            strategy,
            pattern: Some(pattern),
            targets,
        }
    }

    /// Fixed pair returned while the history is too short
    pub fn insufficient_data() -> Self {
        Self {
            diagnosis: Self::INSUFFICIENT_DIAGNOSIS.to_string(),
            strategy: Self::INSUFFICIENT_STRATEGY.to_string(),
            pattern: None,
            targets: Vec::new(),
        }
    }

    /// Fixed pair returned when no pattern fires
    pub fn no_pattern() -> Self {
        Self {
            diagnosis: Self::NO_PATTERN_DIAGNOSIS.to_string(),
            strategy: Self::NO_PATTERN_STRATEGY.to_string(),
            pattern: None,
            targets: Vec::new(),
        }
    }
}

/// Snapshot handed to reporters after every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Most-recent-first
    pub history: Vec<u8>,
    pub analysis: Analysis,
}

/// One registered pattern, as listed to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    /// 1 is evaluated first
    pub priority: usize,
    pub name: &'static str,
    pub description: &'static str,
}

/// Everything the lookup tables know about one number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberView {
    pub number: u8,
    pub terminal: u8,
    pub section: Section,
    pub wheel_position: usize,
    /// Offsets -3, -2, -1, +1, +2, +3
    pub neighbors: [u8; 6],
    /// Central terminal first
    pub horse_triad: [u8; 3],
    pub disguised: Vec<u8>,
}

/// Render numbers as a comma-joined list
pub fn join_numbers<'a>(numbers: impl IntoIterator<Item = &'a u8>) -> String {
    numbers
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
