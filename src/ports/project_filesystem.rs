//! Project-level filesystem operations.
//!
//! All `path` arguments are relative to the project root (the directory
//! holding `dagsmith.toml`). Implementations must reject paths that escape
//! the root boundary.

use crate::domain::AppError;

/// Port for the file I/O the generator performs.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file. The parent directory must exist.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. Returns `false` when there was nothing to remove.
    fn remove_file(&self, path: &str) -> Result<bool, AppError>;

    /// Names of the regular files directly inside `path`, sorted.
    fn list_files(&self, path: &str) -> Result<Vec<String>, AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
