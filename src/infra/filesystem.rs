//! Filesystem operations
//!
//! Handles directory recreation and destination file creation.

use std::path::Path;

use crate::error::FilesystemError;

/// Remove a directory and all its contents, if it exists
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Create a single directory
///
/// Parent directories are not created; a missing parent is an error.
pub fn create_dir(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Replace a directory with a fresh, empty one
pub fn recreate_dir(path: &Path) -> Result<(), FilesystemError> {
    remove_dir_all(path)?;
    create_dir(path)
}

/// Create (or truncate) a file for writing
pub async fn create_file(path: &Path) -> Result<tokio::fs::File, FilesystemError> {
    tokio::fs::File::create(path)
        .await
        .map_err(|e| FilesystemError::WriteFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}
