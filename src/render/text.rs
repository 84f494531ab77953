//! Tabular text rendering for control listings.

use crate::listing::{summarize, ControlSummary};
use crate::model::Control;

const HEADERS: [&str; 3] = ["ID", "TYPE", "TITLE"];

/// Render control records as an aligned text table of id, kind, and title.
///
/// Returns an empty string for an empty listing.
pub fn to_text(controls: &[Control]) -> String {
    let summaries = summarize(controls);
    if summaries.is_empty() {
        return String::new();
    }

    let widths = column_widths(&summaries);
    let mut lines = Vec::with_capacity(summaries.len() + 2);

    lines.push(format_row(HEADERS[0], HEADERS[1], HEADERS[2], &widths));
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for summary in &summaries {
        lines.push(format_row(
            &summary.id,
            &summary.type_name,
            summary.title.as_deref().unwrap_or(""),
            &widths,
        ));
    }

    lines.join("\n")
}

fn column_widths(summaries: &[ControlSummary]) -> [usize; 3] {
    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for summary in summaries {
        widths[0] = widths[0].max(summary.id.chars().count());
        widths[1] = widths[1].max(summary.type_name.chars().count());
        widths[2] = widths[2].max(summary.title.as_deref().unwrap_or("").chars().count());
    }
    widths
}

fn format_row(id: &str, type_name: &str, title: &str, widths: &[usize; 3]) -> String {
    format!(
        "{:<id_w$}  {:<type_w$}  {:<title_w$}",
        id,
        type_name,
        title,
        id_w = widths[0],
        type_w = widths[1],
        title_w = widths[2]
    )
    .trim_end()
    .to_string()
}
