//! Error types for the analyst library

use thiserror::Error;

/// Errors that can occur while building the analyst
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalystError {
    #[error("Invalid wheel order: {0}")]
    InvalidWheel(String),

    #[error("Horse triads {first} and {second} share the lateral pair ({low}, {high})")]
    DuplicateLateralPair {
        first: u8,
        second: u8,
        low: u8,
        high: u8,
    },

    #[error("Unknown pattern '{0}'. Run `roulette-analyst patterns` to list valid names")]
    UnknownPattern(String),
}

pub type AnalystResult<T> = Result<T, AnalystError>;
