//! Filename to C identifier sanitization.

use crate::error::GenerateError;

/// Sanitize a file name into the identifier its constant is declared under.
///
/// Replaces every `.` with `_` and leaves all other characters unchanged.
/// A name that does not yield a valid C identifier (leading digit, space,
/// non-ASCII) is rejected here rather than emitted as uncompilable source.
pub fn sanitize(filename: &str) -> Result<String, GenerateError> {
    let identifier = filename.replace('.', "_");
    if is_valid_identifier(&identifier) {
        Ok(identifier)
    } else {
        Err(GenerateError::InvalidIdentifier {
            file: filename.to_string(),
            identifier,
        })
    }
}

/// C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
