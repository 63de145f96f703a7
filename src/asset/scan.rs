//! Input directory scanning (pure listing, deterministic order).

use std::fs;
use std::path::Path;

use crate::error::GenerateError;

use super::AssetFile;

/// File names that are never embedded.
pub const IGNORED_FILE_NAMES: &[&str] = &[".DS_Store"];

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped, never descended into. Entries are sorted
/// because `read_dir` enumeration order is filesystem-dependent; the
/// generated header must be reproducible run to run.
pub fn scan_assets(dir: &Path) -> Result<Vec<AssetFile>, GenerateError> {
    if !dir.is_dir() {
        return Err(GenerateError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries =
        fs::read_dir(dir).map_err(|e| GenerateError::FileRead(dir.to_path_buf(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenerateError::FileRead(dir.to_path_buf(), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            // A non-UTF-8 name can never become a valid identifier.
            return Err(GenerateError::InvalidIdentifier {
                file: entry.file_name().to_string_lossy().into_owned(),
                identifier: String::new(),
            });
        };
        if IGNORED_FILE_NAMES.contains(&name) {
            continue;
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| GenerateError::FileRead(path.clone(), e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        files.push(AssetFile {
            name: name.to_string(),
            extension,
            content,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
