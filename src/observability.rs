//! Stage-level observer hooks for the pipeline.
//!
//! The process-wide tracing subscriber (see [`crate::logging`]) receives every log line; an
//! observer is the explicit handle the [`crate::pipeline::Pipeline`] reports stage outcomes to.

use tracing::{error, info, warn};

use crate::error::PipelineError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (network or I/O failure).
    Critical,
}

impl Severity {
    /// Classify an error: infrastructure failures are critical, bad input is an error.
    pub fn for_error(e: &PipelineError) -> Self {
        match e {
            PipelineError::Network { .. } | PipelineError::Io(_) | PipelineError::Logging { .. } => {
                Self::Critical
            }
            PipelineError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            PipelineError::Json(err) if err.is_io() => Self::Critical,
            PipelineError::Json(_)
            | PipelineError::Xlsx(_)
            | PipelineError::Parse { .. }
            | PipelineError::EmptyInput { .. }
            | PipelineError::Config { .. } => Self::Error,
        }
    }
}

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Retrieving a source.
    Fetch,
    /// Persisting fetched bytes to raw storage.
    Archive,
    /// Parsing and summarizing a source.
    Analyze,
    /// Writing a processed output.
    Export,
}

/// Context about a stage attempt.
#[derive(Debug, Clone)]
pub struct StageContext {
    pub stage: Stage,
    /// URL, file path or source label the stage worked on.
    pub target: String,
}

impl StageContext {
    pub fn new(stage: Stage, target: impl Into<String>) -> Self {
        Self {
            stage,
            target: target.into(),
        }
    }
}

/// Observer interface for stage outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PipelineObserver: Send + Sync {
    /// Called when a stage succeeds. `detail` is a short human-readable summary.
    fn on_success(&self, _ctx: &StageContext, _detail: &str) {}

    /// Called when a stage fails.
    fn on_failure(&self, _ctx: &StageContext, _severity: Severity, _error: &PipelineError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &StageContext, severity: Severity, error: &PipelineError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards stage events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_success(&self, ctx: &StageContext, detail: &str) {
        info!(stage = ?ctx.stage, subject = %ctx.target, "{detail}");
    }

    fn on_failure(&self, ctx: &StageContext, severity: Severity, error: &PipelineError) {
        match severity {
            Severity::Info => info!(stage = ?ctx.stage, subject = %ctx.target, "{error}"),
            Severity::Warning => warn!(stage = ?ctx.stage, subject = %ctx.target, "{error}"),
            Severity::Error | Severity::Critical => {
                error!(stage = ?ctx.stage, subject = %ctx.target, ?severity, "{error}")
            }
        }
    }

    fn on_alert(&self, ctx: &StageContext, severity: Severity, error: &PipelineError) {
        error!(
            stage = ?ctx.stage,
            subject = %ctx.target,
            ?severity,
            "ALERT: {error}"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::{PipelineObserver, Severity, Stage, StageContext};
    use crate::error::PipelineError;

    #[derive(Default)]
    struct Recording {
        successes: Mutex<Vec<String>>,
        failures: Mutex<Vec<Severity>>,
    }

    impl PipelineObserver for Recording {
        fn on_success(&self, ctx: &StageContext, _detail: &str) {
            self.successes.lock().unwrap().push(ctx.target.clone());
        }

        fn on_failure(&self, _ctx: &StageContext, severity: Severity, _error: &PipelineError) {
            self.failures.lock().unwrap().push(severity);
        }
    }

    #[test]
    fn severity_classification() {
        let io = PipelineError::Io(std::io::Error::other("disk"));
        let net = PipelineError::Network {
            url: "u".to_string(),
            message: "m".to_string(),
        };
        let empty = PipelineError::EmptyInput {
            message: "none".to_string(),
        };
        assert_eq!(Severity::for_error(&io), Severity::Critical);
        assert_eq!(Severity::for_error(&net), Severity::Critical);
        assert_eq!(Severity::for_error(&empty), Severity::Error);
        assert!(Severity::Critical > Severity::Error);
    }

    #[test]
    fn alert_defaults_to_failure() {
        let rec = Recording::default();
        let ctx = StageContext::new(Stage::Export, "out.csv");

        rec.on_success(&ctx, "wrote");
        rec.on_alert(
            &ctx,
            Severity::Critical,
            &PipelineError::Io(std::io::Error::other("x")),
        );

        assert_eq!(*rec.successes.lock().unwrap(), vec!["out.csv".to_string()]);
        assert_eq!(*rec.failures.lock().unwrap(), vec![Severity::Critical]);
    }
}
