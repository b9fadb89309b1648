//! JSON reporter
//!
//! Outputs reports as pretty-printed JSON for piping to jq or other tools.

use crate::models::{NumberView, PatternSummary, SessionReport};
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &SessionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_number(view: &NumberView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

pub fn render_patterns(patterns: &[PatternSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(patterns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;
    use crate::wheel::WheelTables;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["history"][0], 10);
        assert_eq!(parsed["analysis"]["pattern"], "double-half");
        assert_eq!(parsed["analysis"]["targets"].as_array().expect("targets").len(), 6);
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: SessionReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(back.analysis, report.analysis);
        assert_eq!(back.history, report.history);
    }

    #[test]
    fn test_json_pattern_list() {
        let engine = crate::patterns::PatternEngine::default();
        let json_str = render_patterns(&engine.summaries()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed[1]["name"], "horse-with-break");
        assert_eq!(parsed[1]["priority"], 2);
        assert!(parsed[1]["description"].as_str().expect("description").contains("horse"));
    }

    #[test]
    fn test_json_number_view() {
        let tables = WheelTables::european().expect("tables");
        let json_str = render_number(&tables.view(0)).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["section"], "Voisins");
        assert_eq!(parsed["neighbors"].as_array().expect("neighbors").len(), 6);
    }
}
