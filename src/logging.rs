//! Process-wide logging: compact console output plus a size-rotated log file.
//!
//! Call [`init_logging`] once at startup; everything else logs through the `tracing` macros.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{PipelineError, PipelineResult};

/// Install the global subscriber: stderr plus `log_path`, filtered by `config.level`.
///
/// Fails if the log directory cannot be created, the filter directive is invalid, or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, log_path: impl AsRef<Path>) -> PipelineResult<()> {
    let log_path = log_path.as_ref();
    let filter = EnvFilter::try_new(&config.level).map_err(|e| PipelineError::Logging {
        message: format!("invalid log level '{}': {e}", config.level),
    })?;
    let file = RotatingFileWriter::open(log_path, config.max_file_bytes, config.retained_files)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| PipelineError::Logging {
            message: e.to_string(),
        })?;

    info!("Logger initialized. Writing to {}", log_path.display());
    Ok(())
}

/// Appends to a log file, rotating it once it would grow past `max_bytes`.
///
/// Rotation renames `app.log` to `app.log.1`, shifting older files up (`.1` -> `.2`, ...), and
/// drops anything beyond `retained` rotated files.
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    retained: usize,
    file: File,
    written: u64,
}

impl RotatingFileWriter {
    /// Open (or create) `path` for appending, creating its directory if needed.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64, retained: usize) -> PipelineResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            retained,
            file,
            written,
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotated_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.retained == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated_path(self.retained);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.retained).rev() {
            let from = self.rotated_path(n);
            if from.exists() {
                fs::rename(&from, self.rotated_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated_path(1))?;

        self.file = open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // A single oversized record still goes into a fresh file rather than being split.
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
