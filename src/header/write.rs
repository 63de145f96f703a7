//! Output writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GenerateError;

/// Write `text` to `path`, replacing any existing file.
///
/// The text goes to a temporary file in the destination directory first and
/// is renamed over the target, so an interrupted run leaves either the old
/// header or the new one on disk, never a truncated mix.
pub fn write_header(path: &Path, text: &str) -> Result<(), GenerateError> {
    let into_err = |e: std::io::Error| GenerateError::OutputWrite(path.to_path_buf(), e);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(into_err)?;

    // Same directory as the target, so the final rename stays on one
    // filesystem and is atomic.
    let mut tmp = NamedTempFile::new_in(dir).map_err(into_err)?;
    tmp.write_all(text.as_bytes()).map_err(into_err)?;
    tmp.persist(path)
        .map_err(|e| GenerateError::OutputWrite(path.to_path_buf(), e.error))?;
    Ok(())
}
