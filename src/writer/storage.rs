//! Filesystem helpers for the destination path.

use std::path::Path;

use super::error::{Result, WriterError};

/// Directory holding `path`, or `None` for a bare file name.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Create the parent directory of `path` and any missing ancestors.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = parent_dir(path) else {
        return Ok(());
    };

    if parent.is_dir() {
        return Ok(());
    }

    tracing::debug!("Creating output directory {}", parent.display());
    std::fs::create_dir_all(parent).map_err(|e| WriterError::create_directory(parent, e))
}
