//! Text (terminal) reporter

use crate::models::{join_numbers, NumberView, PatternSummary, SessionReport};
use console::Style;

fn paint(text: impl std::fmt::Display, style: &Style, color: bool) -> String {
    if color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render report as formatted terminal output
pub fn render(report: &SessionReport, color: bool) -> String {
    let bold = Style::new().bold();
    let history = if report.history.is_empty() {
        "Empty".to_string()
    } else {
        join_numbers(&report.history)
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n\n",
        paint("Spins:", &bold, color),
        paint(history, &Style::new().cyan(), color)
    ));

    let analysis = &report.analysis;
    let heading = match analysis.pattern {
        Some(kind) => format!("Diagnosis [{}]:", kind),
        None => "Diagnosis:".to_string(),
    };
    out.push_str(&format!("{}\n", paint(heading, &bold, color)));
    out.push_str(&format!(
        "  {}\n",
        paint(&analysis.diagnosis, &Style::new().blue(), color)
    ));
    out.push_str(&format!("{}\n", paint("Strategy:", &bold, color)));
    out.push_str(&format!(
        "  {}\n",
        paint(&analysis.strategy, &Style::new().green(), color)
    ));
    out
}

/// Render the table view of one number
pub fn render_number(view: &NumberView, color: bool) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();
    out.push_str(&format!("{}\n", paint(format!("Number {}", view.number), &bold, color)));
    out.push_str(&format!("  Terminal:       {}\n", view.terminal));
    out.push_str(&format!("  Section:        {}\n", view.section));
    out.push_str(&format!("  Wheel position: {}\n", view.wheel_position));
    let [l3, l2, l1, r1, r2, r3] = view.neighbors;
    out.push_str(&format!(
        "  Neighbors:      {} {} {} [{}] {} {} {}\n",
        l3, l2, l1, view.number, r1, r2, r3
    ));
    out.push_str(&format!(
        "  Horse triad:    {{{}}}\n",
        join_numbers(&view.horse_triad)
    ));
    out.push_str(&format!(
        "  Disguised:      {{{}}}\n",
        join_numbers(&view.disguised)
    ));
    out
}

/// Render the active patterns, highest priority first
pub fn render_patterns(patterns: &[PatternSummary], color: bool) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();
    for p in patterns {
        out.push_str(&format!(
            "{}. {}  {}\n",
            p.priority,
            paint(format!("{:<20}", p.name), &bold, color),
            p.description
        ));
    }
    if patterns.is_empty() {
        out.push_str("No patterns enabled.\n");
    }
    out
}
