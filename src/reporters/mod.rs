//! Output reporters for analyst sessions
//!
//! Supports two output formats:
//! - `text` - Terminal output, optionally colored
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::{NumberView, PatternSummary, SessionReport};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a session report in the specified format
pub fn report(report: &SessionReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report, color)),
        OutputFormat::Json => json::render(report),
    }
}

/// Render the table view of a single number
pub fn number(view: &NumberView, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_number(view, color)),
        OutputFormat::Json => json::render_number(view),
    }
}

/// Render the list of active patterns
pub fn patterns(patterns: &[PatternSummary], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_patterns(patterns, color)),
        OutputFormat::Json => json::render_patterns(patterns),
    }
}
