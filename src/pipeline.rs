//! Sequential fetch -> archive -> analyze -> export run.
//!
//! The [`Pipeline`] is strictly linear: all three sources are fetched, archived verbatim, then
//! analyzed and written. The first failure aborts the run; nothing is retried.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::export::{write_json, write_summary_workbook, write_text_report, write_yearly_csv};
use crate::ingestion::{decode_text, parse_posts, read_table_rows, save_raw, Fetcher};
use crate::observability::{PipelineObserver, Severity, Stage, StageContext};
use crate::processing::{summarize_posts_with, summarize_yearly, text_metrics_with};
use crate::types::{PostsSummary, TextMetrics, YearlySummary};

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub yearly: YearlySummary,
    pub posts: PostsSummary,
    pub text: TextMetrics,
    /// Raw copies, in source order (CSV, JSON, text).
    pub raw_files: Vec<PathBuf>,
    /// Processed outputs, in write order (CSV, workbook, JSON, text report).
    pub outputs: Vec<PathBuf>,
}

struct FetchedSources {
    csv: Vec<u8>,
    json: Vec<u8>,
    text: Vec<u8>,
}

/// Runs the whole workflow against a [`Fetcher`].
pub struct Pipeline<F: Fetcher> {
    config: PipelineConfig,
    fetcher: F,
    observer: Option<Arc<dyn PipelineObserver>>,
    alert_at_or_above: Severity,
}

impl<F: Fetcher> fmt::Debug for Pipeline<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(config: PipelineConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }

    /// Report stage outcomes to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Severity at which failures are also reported through `on_alert`.
    pub fn alert_at_or_above(mut self, severity: Severity) -> Self {
        self.alert_at_or_above = severity;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Execute the run.
    pub fn run(&self) -> PipelineResult<PipelineReport> {
        info!("=== Pipeline start ===");

        let fetched = self.fetch_all()?;
        let raw_files = self.archive_all(&fetched)?;

        let yearly = self.observe(
            Stage::Analyze,
            "airtravel csv",
            |s: &YearlySummary| format!("{} year columns", s.len()),
            || summarize_yearly(&read_table_rows(&fetched.csv)?),
        )?;

        let analysis = &self.config.analysis;
        let posts = self.observe(
            Stage::Analyze,
            "posts json",
            |s: &PostsSummary| format!("{} posts", s.post_count),
            || {
                let posts = parse_posts(&fetched.json)?;
                Ok(summarize_posts_with(
                    &posts,
                    analysis.posts_top_n,
                    analysis.posts_min_word_len,
                ))
            },
        )?;

        let text = self.observe(
            Stage::Analyze,
            "text",
            |m: &TextMetrics| format!("{} words", m.word_count),
            || {
                Ok(text_metrics_with(
                    &decode_text(&fetched.text),
                    analysis.text_top_n,
                    analysis.text_min_word_len,
                ))
            },
        )?;

        let outputs = self.export_all(&yearly, &posts, &text)?;

        info!("=== Pipeline complete ===");
        Ok(PipelineReport {
            yearly,
            posts,
            text,
            raw_files,
            outputs,
        })
    }

    fn fetch_all(&self) -> PipelineResult<FetchedSources> {
        let sources = &self.config.sources;
        let fetch = |url: &str| {
            self.observe(
                Stage::Fetch,
                url,
                |b: &Vec<u8>| format!("{} bytes", b.len()),
                || self.fetcher.fetch(url),
            )
        };
        Ok(FetchedSources {
            csv: fetch(&sources.csv_url)?,
            json: fetch(&sources.json_url)?,
            text: fetch(&sources.text_url)?,
        })
    }

    fn archive_all(&self, fetched: &FetchedSources) -> PipelineResult<Vec<PathBuf>> {
        let paths = &self.config.paths;
        let mut written = Vec::with_capacity(3);
        for (bytes, name) in [
            (&fetched.csv, &paths.raw_csv),
            (&fetched.json, &paths.raw_json),
            (&fetched.text, &paths.raw_text),
        ] {
            let target = paths.raw_dir.join(name);
            let path = self.observe(
                Stage::Archive,
                target.display().to_string(),
                |_: &PathBuf| "saved raw".to_string(),
                || save_raw(bytes, &paths.raw_dir, name),
            )?;
            written.push(path);
        }
        Ok(written)
    }

    fn export_all(
        &self,
        yearly: &YearlySummary,
        posts: &PostsSummary,
        text: &TextMetrics,
    ) -> PipelineResult<Vec<PathBuf>> {
        let paths = &self.config.paths;
        let csv_out = paths.csv_out_path();
        let xlsx_out = paths.xlsx_out_path();
        let json_out = paths.json_out_path();
        let text_out = paths.text_out_path();

        self.export(&csv_out, || write_yearly_csv(yearly, &csv_out))?;
        self.export(&xlsx_out, || write_summary_workbook(yearly, &xlsx_out))?;
        self.export(&json_out, || write_json(posts, &json_out))?;
        self.export(&text_out, || {
            write_text_report(text, &text_out, &self.config.sources.text_source_name)
        })?;

        Ok(vec![csv_out, xlsx_out, json_out, text_out])
    }

    fn export(
        &self,
        path: &Path,
        write: impl FnOnce() -> PipelineResult<()>,
    ) -> PipelineResult<()> {
        self.observe(
            Stage::Export,
            path.display().to_string(),
            |_: &()| "written".to_string(),
            write,
        )
    }

    /// Run `op`, reporting its outcome to the observer (if any).
    fn observe<T>(
        &self,
        stage: Stage,
        target: impl Into<String>,
        detail: impl FnOnce(&T) -> String,
        op: impl FnOnce() -> PipelineResult<T>,
    ) -> PipelineResult<T> {
        let result = op();
        if let Some(obs) = self.observer.as_ref() {
            let ctx = StageContext::new(stage, target);
            match &result {
                Ok(value) => obs.on_success(&ctx, &detail(value)),
                Err(e) => {
                    let sev = Severity::for_error(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }
        result
    }
}
