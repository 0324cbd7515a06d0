//! CSV ingestion into [`TableRow`]s.

use crate::error::PipelineResult;
use crate::types::TableRow;

/// Parse fetched CSV bytes into rows keyed by header name.
///
/// Rules:
///
/// - Invalid UTF-8 is replaced rather than rejected.
/// - The first record is the header. Header names are trimmed and surrounding double quotes are
///   stripped, so `"Month", "1958"` yields `Month` and `1958`.
/// - Short records are tolerated; their missing cells read as empty strings, so every row
///   carries the full header key set. Cells past the header are dropped.
/// - Cell values are kept raw; interpretation is left to the analyzers.
pub fn read_table_rows(bytes: &[u8]) -> PipelineResult<Vec<TableRow>> {
    let text = String::from_utf8_lossy(bytes);
    read_table_rows_from_str(&text)
}

/// Parse CSV text into rows keyed by header name. See [`read_table_rows`].
pub fn read_table_rows_from_str(input: &str) -> PipelineResult<Vec<TableRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    read_table_rows_from_reader(&mut rdr)
}

/// Read rows from an existing CSV reader.
pub fn read_table_rows_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> PipelineResult<Vec<TableRow>> {
    let headers: Vec<String> = rdr.headers()?.iter().map(clean_header).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: TableRow = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or_default().to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}
