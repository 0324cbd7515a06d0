//! Fetch the three public datasets, summarize them, and write the processed outputs.
//!
//! Reads `pipeline.toml` from the working directory when present, otherwise uses defaults.
//! Exits 0 on success and 1 on any failure.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::error;

use web_data_reports::config::{PipelineConfig, CONFIG_FILE_NAME};
use web_data_reports::ingestion::HttpFetcher;
use web_data_reports::logging::init_logging;
use web_data_reports::observability::TracingObserver;
use web_data_reports::pipeline::Pipeline;

fn main() -> Result<()> {
    let config = PipelineConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load {CONFIG_FILE_NAME}"))?;

    let log_path = config.paths.log_path();
    init_logging(&config.logging, &log_path).context("Failed to initialize logging")?;

    let raw_dir = config.paths.raw_dir.clone();
    let processed_dir = config.paths.processed_dir.clone();

    let fetcher = HttpFetcher::new(config.fetch.timeout()).context("Failed to build HTTP client")?;
    let pipeline = Pipeline::new(config, fetcher).with_observer(Arc::new(TracingObserver));

    if let Err(e) = pipeline.run() {
        error!("Pipeline failed: {e}");
        return Err(e).context("Pipeline failed");
    }

    println!(
        "Done. See: {}, {}, and {}",
        raw_dir.display(),
        processed_dir.display(),
        log_path.display()
    );
    Ok(())
}
