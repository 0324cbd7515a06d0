use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use web_data_reports::export::{
    write_json, write_summary_workbook, write_text_report, write_yearly_csv, RANKING_SHEET,
    SUMMARY_SHEET,
};
use web_data_reports::types::{TextMetrics, WordCount, YearStats, YearlySummary};
use web_data_reports::PipelineError;

fn stats(months_counted: usize, total_passengers: u64, avg_per_month: f64) -> YearStats {
    YearStats {
        months_counted,
        total_passengers,
        avg_per_month,
    }
}

/// Years deliberately out of order so sorting differences are visible.
fn sample_summary() -> YearlySummary {
    let mut summary = YearlySummary::new();
    summary.insert("1959".to_string(), stats(12, 5140, 428.33));
    summary.insert("1958".to_string(), stats(12, 4572, 381.0));
    summary.insert("1960".to_string(), stats(12, 5714, 476.17));
    summary.insert("1957".to_string(), stats(0, 0, 0.0));
    summary
}

fn sheet_rows(path: &Path, sheet: &str) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    range.rows().map(|r| r.to_vec()).collect()
}

fn s(v: &str) -> Data {
    Data::String(v.to_string())
}

#[test]
fn csv_writer_keeps_summary_order_and_creates_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data").join("processed").join("totals.csv");

    write_yearly_csv(&sample_summary(), &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "year,months_counted,total_passengers,avg_per_month\r\n\
         1959,12,5140,428.33\r\n\
         1958,12,4572,381.0\r\n\
         1960,12,5714,476.17\r\n\
         1957,0,0,0.0\r\n"
    );
}

#[test]
fn workbook_has_sorted_summary_and_ranking_sheets() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("summary.xlsx");

    write_summary_workbook(&sample_summary(), &path).unwrap();

    let workbook = open_workbook_auto(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![SUMMARY_SHEET.to_string(), RANKING_SHEET.to_string()]
    );

    let summary_rows = sheet_rows(&path, SUMMARY_SHEET);
    assert_eq!(
        summary_rows[0],
        vec![
            s("Year"),
            s("Months Counted"),
            s("Total Passengers"),
            s("Avg Per Month")
        ]
    );
    let years: Vec<Data> = summary_rows[1..].iter().map(|r| r[0].clone()).collect();
    assert_eq!(years, vec![s("1957"), s("1958"), s("1959"), s("1960")]);
    assert_eq!(
        summary_rows[3],
        vec![s("1959"), Data::Float(12.0), Data::Float(5140.0), Data::Float(428.33)]
    );

    let ranking_rows = sheet_rows(&path, RANKING_SHEET);
    assert_eq!(ranking_rows[0], vec![s("Year"), s("Total Passengers")]);
    assert_eq!(
        ranking_rows[1..].to_vec(),
        vec![
            vec![s("1960"), Data::Float(5714.0)],
            vec![s("1959"), Data::Float(5140.0)],
            vec![s("1958"), Data::Float(4572.0)],
            vec![s("1957"), Data::Float(0.0)],
        ]
    );
}

#[test]
fn json_writer_pretty_prints() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("summary.json");

    write_json(&sample_summary(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"1959\": {\n    \"months_counted\": 12,"));
    let back: YearlySummary = serde_json::from_str(&text).unwrap();
    assert_eq!(back, sample_summary());
    assert_eq!(back.keys().next().map(String::as_str), Some("1959"));
}

#[test]
fn text_report_file_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("text_report.txt");
    let metrics = TextMetrics {
        characters: 174,
        word_count: 28,
        top_words: vec![WordCount::new("requests", 3), WordCount::new("simple", 1)],
    };

    write_text_report(&metrics, &path, "psf/requests README").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "Text Report for: psf/requests README");
    let stamp = lines[1].strip_prefix("Generated: ").unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S").is_ok());
    assert_eq!(lines[2], "-".repeat(60));
    assert_eq!(&lines[3..7], ["Characters: 174", "Word Count: 28", "", "Top Words (min length 5):"]);
    assert_eq!(lines[7], format!("  {:<20} 3", "requests"));
    assert_eq!(lines[8], format!("  {:<20} 1", "simple"));
    assert_eq!(lines.len(), 9);
}

#[test]
fn unwritable_target_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where the parent directory should be.
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let path = blocker.join("out.csv");

    let err = write_yearly_csv(&sample_summary(), &path).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));

    let err = write_json(&sample_summary(), blocker.join("out.json")).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));

    let err = write_summary_workbook(&sample_summary(), blocker.join("out.xlsx")).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));

    let metrics = TextMetrics {
        characters: 3,
        word_count: 1,
        top_words: vec![],
    };
    let err = write_text_report(&metrics, blocker.join("out.txt"), "src").unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}
