//! Fixed-layout plain-text report for [`TextMetrics`].

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use super::ensure_parent_dir;
use crate::error::PipelineResult;
use crate::types::TextMetrics;

const DIVIDER_WIDTH: usize = 60;
const WORD_COLUMN_WIDTH: usize = 20;

/// Render the report text. Lines are joined with `\n`; there is no trailing newline.
///
/// ```text
/// Text Report for: <source_name>
/// Generated: 2026-10-18T09:30:00
/// ------------------------------------------------------------
/// Characters: 26
/// Word Count: 6
///
/// Top Words (min length 5):
///   eeeee                2
/// ```
pub fn render_text_report(
    metrics: &TextMetrics,
    source_name: &str,
    generated_at: DateTime<Local>,
) -> String {
    let mut lines = vec![
        format!("Text Report for: {source_name}"),
        format!("Generated: {}", generated_at.format("%Y-%m-%dT%H:%M:%S")),
        "-".repeat(DIVIDER_WIDTH),
        format!("Characters: {}", metrics.characters),
        format!("Word Count: {}", metrics.word_count),
        String::new(),
        "Top Words (min length 5):".to_string(),
    ];
    for wc in &metrics.top_words {
        lines.push(format!("  {:<width$} {}", wc.word, wc.count, width = WORD_COLUMN_WIDTH));
    }
    lines.join("\n")
}

/// Write the report to `path`, stamped with the current local time.
pub fn write_text_report(
    metrics: &TextMetrics,
    path: impl AsRef<Path>,
    source_name: &str,
) -> PipelineResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    fs::write(path, render_text_report(metrics, source_name, Local::now()))?;
    info!("Wrote Text: {}", path.display());
    Ok(())
}
