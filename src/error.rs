use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by fetch, parse, analysis and export functions.
///
/// A single enum is shared across every stage so the orchestrator can propagate with `?`.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fetching a source failed (connection error, timeout, non-2xx status).
    #[error("network error fetching '{url}': {message}")]
    Network { url: String, message: String },

    /// Underlying I/O error (e.g. output directory not creatable, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workbook serialization error.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A source document has an unexpected overall shape.
    #[error("failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },

    /// An analyzer received no input to derive its structure from.
    #[error("empty input: {message}")]
    EmptyInput { message: String },

    /// The configuration file could not be read or parsed.
    #[error("config error: {message}")]
    Config { message: String },

    /// The logging sinks could not be installed.
    #[error("logging error: {message}")]
    Logging { message: String },
}

impl PipelineError {
    pub(crate) fn network(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
