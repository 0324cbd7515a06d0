//! Per-column aggregation of a month-by-year table.

use tracing::{debug, info};

use crate::error::{PipelineError, PipelineResult};
use crate::types::{TableRow, YearStats, YearlySummary};

/// Name (case-insensitive) of the categorical column that is never aggregated.
pub const CATEGORY_COLUMN: &str = "month";

/// Summarize every numeric column of `rows`.
///
/// Rules:
///
/// - Numeric columns are the columns of the **first** row whose lowercased name is not
///   [`CATEGORY_COLUMN`]. Columns that only appear in later rows are ignored.
/// - A cell counts when its trimmed value is a non-empty run of ASCII digits that fits in a
///   `u64`. Anything else (empty, negative, decimal, text) is skipped.
/// - `avg_per_month` is rounded to 2 decimal places, `0.0` for a column with no counted cells.
///
/// Returns [`PipelineError::EmptyInput`] if `rows` is empty.
pub fn summarize_yearly(rows: &[TableRow]) -> PipelineResult<YearlySummary> {
    let first = rows.first().ok_or_else(|| PipelineError::EmptyInput {
        message: "table has no rows to derive year columns from".to_string(),
    })?;

    let years: Vec<&str> = first
        .keys()
        .map(String::as_str)
        .filter(|name| name.to_lowercase() != CATEGORY_COLUMN)
        .collect();

    let mut summary = YearlySummary::with_capacity(years.len());
    for year in years {
        let values: Vec<u64> = rows
            .iter()
            .filter_map(|row| parse_count(row.get(year).map(String::as_str).unwrap_or("")))
            .collect();
        let skipped = rows.len() - values.len();
        if skipped > 0 {
            debug!(year, skipped, "skipped non-numeric cells");
        }
        summary.insert(year.to_string(), year_stats(&values));
    }

    info!("Airtravel summary: {summary:?}");
    Ok(summary)
}

fn parse_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

fn year_stats(values: &[u64]) -> YearStats {
    let total: u64 = values.iter().sum();
    let avg = if values.is_empty() {
        0.0
    } else {
        round2(total as f64 / values.len() as f64)
    };
    YearStats {
        months_counted: values.len(),
        total_passengers: total,
        avg_per_month: avg,
    }
}

/// Two decimal places, exact ties going to the even digit (`0.125` -> `0.12`).
fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
