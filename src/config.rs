//! Pipeline configuration.
//!
//! Every field has a default, so an absent or partial `pipeline.toml` still yields a complete
//! [`PipelineConfig`]. The defaults reproduce the public sources and output layout the tool was
//! built around.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};
use crate::processing::{POSTS_MIN_WORD_LEN, POSTS_TOP_N, TEXT_MIN_WORD_LEN, TEXT_TOP_N};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pipeline.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the three datasets come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Month-by-year passenger table.
    #[serde(default = "default_csv_url")]
    pub csv_url: String,

    /// JSON listing of posts.
    #[serde(default = "default_json_url")]
    pub json_url: String,

    /// Free text to measure.
    #[serde(default = "default_text_url")]
    pub text_url: String,

    /// Label printed in the text report title.
    #[serde(default = "default_text_source_name")]
    pub text_source_name: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            csv_url: default_csv_url(),
            json_url: default_json_url(),
            text_url: default_text_url(),
            text_source_name: default_text_source_name(),
        }
    }
}

fn default_csv_url() -> String {
    "https://people.sc.fsu.edu/~jburkardt/data/csv/airtravel.csv".to_string()
}

fn default_json_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_text_url() -> String {
    "https://raw.githubusercontent.com/psf/requests/main/README.md".to_string()
}

fn default_text_source_name() -> String {
    "psf/requests README".to_string()
}

/// Directory and file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_raw_csv")]
    pub raw_csv: String,

    #[serde(default = "default_raw_json")]
    pub raw_json: String,

    #[serde(default = "default_raw_text")]
    pub raw_text: String,

    #[serde(default = "default_csv_out")]
    pub csv_out: String,

    #[serde(default = "default_xlsx_out")]
    pub xlsx_out: String,

    #[serde(default = "default_json_out")]
    pub json_out: String,

    #[serde(default = "default_text_out")]
    pub text_out: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            processed_dir: default_processed_dir(),
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            raw_csv: default_raw_csv(),
            raw_json: default_raw_json(),
            raw_text: default_raw_text(),
            csv_out: default_csv_out(),
            xlsx_out: default_xlsx_out(),
            json_out: default_json_out(),
            text_out: default_text_out(),
        }
    }
}

impl PathsConfig {
    /// Use `root` as the parent of the raw, processed and log directories.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            raw_dir: root.join(&defaults.raw_dir),
            processed_dir: root.join(&defaults.processed_dir),
            log_dir: root.join(&defaults.log_dir),
            ..defaults
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    pub fn csv_out_path(&self) -> PathBuf {
        self.processed_dir.join(&self.csv_out)
    }

    pub fn xlsx_out_path(&self) -> PathBuf {
        self.processed_dir.join(&self.xlsx_out)
    }

    pub fn json_out_path(&self) -> PathBuf {
        self.processed_dir.join(&self.json_out)
    }

    pub fn text_out_path(&self) -> PathBuf {
        self.processed_dir.join(&self.text_out)
    }
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("data").join("raw")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("data").join("processed")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_file() -> String {
    "pipeline.log".to_string()
}

fn default_raw_csv() -> String {
    "airtravel.csv".to_string()
}

fn default_raw_json() -> String {
    "posts.json".to_string()
}

fn default_raw_text() -> String {
    "requests_readme.txt".to_string()
}

fn default_csv_out() -> String {
    "airtravel_yearly_totals.csv".to_string()
}

fn default_xlsx_out() -> String {
    "summary.xlsx".to_string()
}

fn default_json_out() -> String {
    "posts_summary.json".to_string()
}

fn default_text_out() -> String {
    "text_report.txt".to_string()
}

/// HTTP retrieval settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_timeout() -> u64 {
    30
}

/// Word-ranking limits for the analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_posts_top_n")]
    pub posts_top_n: usize,

    /// Words shorter than this are not ranked for posts.
    #[serde(default = "default_posts_min_word_len")]
    pub posts_min_word_len: usize,

    #[serde(default = "default_text_top_n")]
    pub text_top_n: usize,

    /// Words shorter than this are not ranked for free text.
    #[serde(default = "default_text_min_word_len")]
    pub text_min_word_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            posts_top_n: default_posts_top_n(),
            posts_min_word_len: default_posts_min_word_len(),
            text_top_n: default_text_top_n(),
            text_min_word_len: default_text_min_word_len(),
        }
    }
}

fn default_posts_top_n() -> usize {
    POSTS_TOP_N
}

fn default_posts_min_word_len() -> usize {
    POSTS_MIN_WORD_LEN
}

fn default_text_top_n() -> usize {
    TEXT_TOP_N
}

fn default_text_min_word_len() -> usize {
    TEXT_MIN_WORD_LEN
}

/// Console and file logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"web_data_reports=debug"`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Size at which the log file is rotated.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Rotated files kept besides the active one.
    #[serde(default = "default_retained_files")]
    pub retained_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            max_file_bytes: default_max_file_bytes(),
            retained_files: default_retained_files(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

fn default_retained_files() -> usize {
    5
}

impl PipelineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> PipelineResult<Self> {
        toml::from_str(content).map_err(|e| PipelineError::Config {
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PipelineError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            PipelineError::Config { message } => PipelineError::Config {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML, e.g. to seed a config file.
    pub fn to_toml_string(&self) -> PipelineResult<String> {
        toml::to_string_pretty(self).map_err(|e| PipelineError::Config {
            message: e.to_string(),
        })
    }
}
