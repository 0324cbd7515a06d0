//! Pretty-printed JSON writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::ensure_parent_dir;
use crate::error::PipelineResult;

/// Serialize `value` with 2-space indentation. Map keys keep the order the value yields them in.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` to `path` as pretty-printed JSON (no trailing newline).
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> PipelineResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush()?;
    info!("Wrote JSON: {}", path.display());
    Ok(())
}
