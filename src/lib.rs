//! `web-data-reports` fetches three small public datasets, computes aggregate statistics over
//! each, and writes the results as CSV, Excel, JSON and plain-text reports.
//!
//! The primary entrypoint is [`pipeline::Pipeline`], which runs fetch -> archive -> analyze ->
//! export in order against any [`ingestion::Fetcher`]. The analyzers and writers are also usable
//! on their own.
//!
//! ## Sources and outputs
//!
//! | Source | Analyzer | Outputs |
//! |---|---|---|
//! | Month-by-year CSV table | [`processing::summarize_yearly`] | CSV ([`export::write_yearly_csv`]), workbook ([`export::write_summary_workbook`]) |
//! | JSON posts listing | [`processing::summarize_posts`] | JSON ([`export::write_json`]) |
//! | Free text | [`processing::text_metrics`] | text report ([`export::write_text_report`]) |
//!
//! Fetched bytes are also archived verbatim under the raw directory before processing.
//!
//! ## Quick example: analyze without the network
//!
//! ```rust
//! use web_data_reports::ingestion::{parse_posts, read_table_rows};
//! use web_data_reports::processing::{summarize_posts, summarize_yearly};
//!
//! # fn main() -> Result<(), web_data_reports::PipelineError> {
//! let rows = read_table_rows(b"Month,1958,1959\nJAN,340,360\nFEB,318,342\n")?;
//! let yearly = summarize_yearly(&rows)?;
//! assert_eq!(yearly["1959"].total_passengers, 702);
//! assert_eq!(yearly["1959"].avg_per_month, 351.0);
//!
//! let posts = parse_posts(br#"[{"userId":1,"title":"hello world","body":"world peace"}]"#)?;
//! let summary = summarize_posts(&posts);
//! assert_eq!(summary.post_count, 1);
//! assert_eq!(summary.top_words[0].word, "world");
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the whole pipeline
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use web_data_reports::config::PipelineConfig;
//! use web_data_reports::ingestion::HttpFetcher;
//! use web_data_reports::observability::TracingObserver;
//! use web_data_reports::pipeline::Pipeline;
//!
//! # fn main() -> Result<(), web_data_reports::PipelineError> {
//! let config = PipelineConfig::default();
//! let fetcher = HttpFetcher::new(config.fetch.timeout())?;
//! let report = Pipeline::new(config, fetcher)
//!     .with_observer(Arc::new(TracingObserver))
//!     .run()?;
//! println!("wrote {} files", report.outputs.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: fetching, raw archival and decoding of the three sources
//! - [`processing`]: the analyzers
//! - [`export`]: output writers
//! - [`pipeline`]: the orchestrator
//! - [`config`], [`logging`], [`observability`]: configuration, log sinks and stage hooks
//! - [`types`], [`error`]: shared data model and error type

pub mod config;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod logging;
pub mod observability;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{PipelineError, PipelineResult};
