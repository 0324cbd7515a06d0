//! Raw storage: verbatim copies of fetched bytes, kept for audit and replay.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineResult;

/// Write `bytes` unchanged to `dir/file_name`, creating `dir` if needed.
///
/// Returns the path that was written. An existing file is overwritten.
pub fn save_raw(bytes: &[u8], dir: impl AsRef<Path>, file_name: &str) -> PipelineResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    info!("Saved raw: {}", path.display());
    Ok(path)
}
