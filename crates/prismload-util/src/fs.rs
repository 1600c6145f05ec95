use std::path::{Path, PathBuf};

use crate::errors::PrismloadError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Read a UTF-8 file, mapping failures to [`PrismloadError::Io`].
pub fn read_to_string(path: &Path) -> Result<String, PrismloadError> {
    tracing::debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
