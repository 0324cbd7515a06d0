//! Two-sheet workbook writer for [`YearlySummary`].

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tracing::info;

use super::ensure_parent_dir;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{YearStats, YearlySummary};

/// Name of the per-year sheet (rows sorted by year label).
pub const SUMMARY_SHEET: &str = "AirTravel Summary";
/// Name of the ranking sheet (rows sorted by total, largest first).
pub const RANKING_SHEET: &str = "Totals Ranking";

const SUMMARY_HEADER: [&str; 4] = ["Year", "Months Counted", "Total Passengers", "Avg Per Month"];
const RANKING_HEADER: [&str; 2] = ["Year", "Total Passengers"];

/// Write `summary` to an `.xlsx` workbook at `path`.
///
/// - [`SUMMARY_SHEET`]: one row per year, sorted by the year label as a string.
/// - [`RANKING_SHEET`]: year and total, sorted by total descending. Equal totals keep the
///   summary's order.
pub fn write_summary_workbook(summary: &YearlySummary, path: impl AsRef<Path>) -> PipelineResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut by_year: Vec<(&String, &YearStats)> = summary.iter().collect();
    by_year.sort_by(|a, b| a.0.cmp(b.0));

    let mut by_total: Vec<(&String, &YearStats)> = summary.iter().collect();
    by_total.sort_by(|a, b| b.1.total_passengers.cmp(&a.1.total_passengers));

    let mut workbook = Workbook::new();
    write_summary_sheet(workbook.add_worksheet(), &by_year)?;
    write_ranking_sheet(workbook.add_worksheet(), &by_total)?;
    workbook.save(path).map_err(save_error)?;

    info!("Wrote Excel: {}", path.display());
    Ok(())
}

fn write_summary_sheet(ws: &mut Worksheet, rows: &[(&String, &YearStats)]) -> Result<(), XlsxError> {
    ws.set_name(SUMMARY_SHEET)?;
    write_header(ws, &SUMMARY_HEADER)?;
    for (idx0, (year, stats)) in rows.iter().enumerate() {
        let row = sheet_row(idx0);
        ws.write_string(row, 0, year.as_str())?;
        ws.write_number(row, 1, stats.months_counted as f64)?;
        ws.write_number(row, 2, stats.total_passengers as f64)?;
        ws.write_number(row, 3, stats.avg_per_month)?;
    }
    Ok(())
}

fn write_ranking_sheet(ws: &mut Worksheet, rows: &[(&String, &YearStats)]) -> Result<(), XlsxError> {
    ws.set_name(RANKING_SHEET)?;
    write_header(ws, &RANKING_HEADER)?;
    for (idx0, (year, stats)) in rows.iter().enumerate() {
        let row = sheet_row(idx0);
        ws.write_string(row, 0, year.as_str())?;
        ws.write_number(row, 1, stats.total_passengers as f64)?;
    }
    Ok(())
}

fn write_header(ws: &mut Worksheet, header: &[&str]) -> Result<(), XlsxError> {
    for (col, title) in header.iter().enumerate() {
        ws.write_string(0, col as u16, *title)?;
    }
    Ok(())
}

fn save_error(e: XlsxError) -> PipelineError {
    match e {
        XlsxError::IoError(io) => PipelineError::Io(io),
        other => PipelineError::Xlsx(other),
    }
}

// Data rows start below the header.
fn sheet_row(idx0: usize) -> u32 {
    (idx0 + 1) as u32
}
