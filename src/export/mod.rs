//! Writers for processed outputs.
//!
//! Each writer is a stateless function taking a summary by reference and a target path. Missing
//! parent directories are created; a path that cannot be created or written fails with
//! [`crate::PipelineError::Io`].
//!
//! - [`csv`]: yearly totals as a delimited table (summary order)
//! - [`excel`]: two-sheet workbook (sorted by year, ranked by total)
//! - [`json`]: any serializable summary, pretty-printed
//! - [`report`]: fixed-layout plain-text report for [`crate::types::TextMetrics`]

pub mod csv;
pub mod excel;
pub mod json;
pub mod report;

use std::fs;
use std::path::Path;

use crate::error::PipelineResult;

pub use self::csv::{write_yearly_csv, write_yearly_csv_to_writer};
pub use excel::{write_summary_workbook, RANKING_SHEET, SUMMARY_SHEET};
pub use json::{to_pretty_json, write_json};
pub use report::{render_text_report, write_text_report};

/// Create the parent directory of `path` if it has one and it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> PipelineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Render a float for the reports: integral values keep one decimal (`329.0`).
pub(crate) fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
