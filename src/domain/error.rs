use std::io;

use thiserror::Error;

/// Library-wide error type for dagsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings file is malformed or holds invalid values.
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Project already initialized at the target location.
    #[error("dagsmith.toml already exists in {0}")]
    ProjectExists(String),

    /// Config directory is missing.
    #[error("Config directory not found: {0}")]
    ConfigDirNotFound(String),

    /// Requested config file does not exist in the config directory.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Indicator config could not be parsed.
    #[error("Failed to parse config {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Indicator name or code cannot be used as part of a file name.
    #[error("Config {path}: {field} '{value}' must not contain '/', '\\' or '..'")]
    UnsafeIndicatorField { path: String, field: &'static str, value: String },

    /// DAG template file is missing.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Two configs map to the same task inside one group.
    #[error("Duplicate task '{task}' in group '{group}' (from {path})")]
    DuplicateTask { group: String, task: String, path: String },

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project root")]
    PathOutsideProject(String),

    /// Internal invariant violation or serialization failure.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn settings<S: Into<String>>(message: S) -> Self {
        AppError::Settings(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Settings(_)
            | AppError::TomlParseError(_)
            | AppError::ConfigParse { .. }
            | AppError::UnsafeIndicatorField { .. }
            | AppError::DuplicateTask { .. }
            | AppError::PathOutsideProject(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigDirNotFound(_)
            | AppError::ConfigNotFound(_)
            | AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::ProjectExists(_) => io::ErrorKind::AlreadyExists,
            AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
