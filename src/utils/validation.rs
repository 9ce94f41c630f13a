//! Centralized validation and path helpers.

use std::path::{Path, PathBuf};

/// File name of the deduplicated SAM written next to the input
pub const CLEANED_FILE_NAME: &str = "aligned_output_unique.sam";

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' does not exist")]
    NotFound(PathBuf),
    #[error("'{0}' is not a regular file")]
    NotAFile(PathBuf),
}

/// Check that the input path exists and is a regular file.
///
/// Symlinks are followed, so a link to a regular file is accepted.
///
/// # Errors
///
/// Returns `ValidationError::NotFound` if nothing exists at `path`, or
/// `ValidationError::NotAFile` if it is a directory or other non-file entry.
pub fn validate_input_file(path: &Path) -> Result<(), ValidationError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(ValidationError::NotAFile(path.to_path_buf())),
        Err(_) => Err(ValidationError::NotFound(path.to_path_buf())),
    }
}

/// Default location of the cleaned SAM: [`CLEANED_FILE_NAME`] in the input's
/// directory. A bare file name resolves to the current directory.
#[must_use]
pub fn cleaned_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CLEANED_FILE_NAME)
}

/// Directory a path lives in, usable as a base for sibling temp files
#[must_use]
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
