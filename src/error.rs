//! Error types for the generation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant names the offending path so the terminal message is enough
/// to locate the problem. The pipeline is fail-fast: the first error stops
/// all remaining stages and no output is committed.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("input directory not found or not a directory: `{0}`")]
    DirectoryNotFound(PathBuf),

    #[error("failed to read `{0}`")]
    FileRead(PathBuf, #[source] io::Error),

    #[error("failed to minify `{path}`: {reason}")]
    Minify { path: PathBuf, reason: String },

    #[error("`{file}` does not sanitize to a valid C identifier (got `{identifier}`)")]
    InvalidIdentifier { file: String, identifier: String },

    #[error("`{first}` and `{second}` both sanitize to identifier `{identifier}`")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("failed to write output header `{0}`")]
    OutputWrite(PathBuf, #[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_error_display_names_path() {
        let err = GenerateError::FileRead(
            PathBuf::from("www/index.html"),
            io::Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{err}");
        assert!(display.contains("www/index.html"));

        let err = GenerateError::IdentifierCollision {
            identifier: "a_b_css".to_string(),
            first: "a.b.css".to_string(),
            second: "a_b.css".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("a.b.css"));
        assert!(display.contains("a_b.css"));
        assert!(display.contains("a_b_css"));
    }
}
