//! Delimited-table writer for [`YearlySummary`].

use std::fs::File;
use std::path::Path;

use tracing::info;

use super::{ensure_parent_dir, format_float};
use crate::error::PipelineResult;
use crate::types::YearlySummary;

/// Header row of the yearly totals table.
pub const YEARLY_CSV_HEADER: [&str; 4] = ["year", "months_counted", "total_passengers", "avg_per_month"];

/// Write `summary` to `path` as CSV, one row per year in the summary's own order.
///
/// Years are **not** sorted; an empty summary produces just the header.
pub fn write_yearly_csv(summary: &YearlySummary, path: impl AsRef<Path>) -> PipelineResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_yearly_csv_to_writer(summary, file)?;
    info!("Wrote CSV: {}", path.display());
    Ok(())
}

/// Write the CSV table to any writer. Records end with `\r\n`.
pub fn write_yearly_csv_to_writer<W: std::io::Write>(
    summary: &YearlySummary,
    writer: W,
) -> PipelineResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(YEARLY_CSV_HEADER)?;
    for (year, stats) in summary {
        wtr.write_record([
            year.clone(),
            stats.months_counted.to_string(),
            stats.total_passengers.to_string(),
            format_float(stats.avg_per_month),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_yearly_csv_to_writer;
    use crate::types::{YearStats, YearlySummary};

    #[test]
    fn keeps_insertion_order() {
        let mut summary = YearlySummary::new();
        summary.insert(
            "1960".to_string(),
            YearStats {
                months_counted: 1,
                total_passengers: 5,
                avg_per_month: 5.0,
            },
        );
        summary.insert(
            "1958".to_string(),
            YearStats {
                months_counted: 3,
                total_passengers: 4,
                avg_per_month: 1.33,
            },
        );

        let mut out = Vec::new();
        write_yearly_csv_to_writer(&summary, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year,months_counted,total_passengers,avg_per_month\r\n1960,1,5,5.0\r\n1958,3,4,1.33\r\n"
        );
    }

    #[test]
    fn empty_summary_writes_header_only() {
        let mut out = Vec::new();
        write_yearly_csv_to_writer(&YearlySummary::new(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year,months_counted,total_passengers,avg_per_month\r\n"
        );
    }
}
