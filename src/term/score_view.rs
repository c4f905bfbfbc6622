//! Pure formatting of a [`ScoreTable`] into text lines.
//!
//! Kept free of terminal concerns so it can be tested as plain strings;
//! the renderer decides styling and where the lines go.

use crate::core::{RunningTotal, ScoreTable};

pub const TABLE_HEADER: &str = "=== Current Score ===";
pub const TABLE_FOOTER: &str = "======================";

/// Render the table into one line per row of output.
pub fn format_score_table(table: &ScoreTable) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.rows.len() * 5 + 3);
    lines.push(TABLE_HEADER.to_string());
    lines.push(String::new());

    for row in &table.rows {
        lines.push(format!("Frame {}:", row.number));
        lines.push(format!("  First Roll: {}", row.first));
        lines.push(format!("  Second Roll: {}", row.second));
        if let Some(third) = &row.third {
            lines.push(format!("  Third Roll: {third}"));
        }
        lines.push(format!("  Running Total: {}", format_running(row.running)));
        lines.push(String::new());
    }

    lines.push(TABLE_FOOTER.to_string());
    lines
}

fn format_running(running: RunningTotal) -> String {
    match running {
        RunningTotal::Total(total) => total.to_string(),
        RunningTotal::PendingBonus => "- (Waiting Bonus)".to_string(),
        RunningTotal::NotAvailable => "-".to_string(),
    }
}
