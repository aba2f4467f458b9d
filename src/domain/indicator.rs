//! Indicator config records and the names derived from them.

use serde::{Deserialize, Serialize};

use super::AppError;

/// Suffix appended to every generated DAG name.
pub const DAG_NAME_SUFFIX: &str = "etl";

/// One indicator config, loaded 1:1 from a JSON file.
///
/// Extra keys in the source object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub indicator_name: String,
    pub indicator_code: String,
}

impl IndicatorConfig {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { indicator_name: name.into(), indicator_code: code.into() }
    }

    /// Parse a config from JSON text. `path` is only used for error reporting.
    ///
    /// Names and codes that cannot form a plain file name are rejected here, so
    /// no caller ever derives an output path from them.
    pub fn from_json(content: &str, path: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(content).map_err(|e| AppError::ConfigParse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.ensure_file_name_safe(path)?;
        Ok(config)
    }

    /// Reject a name or code containing a path separator or `..`.
    pub fn ensure_file_name_safe(&self, path: &str) -> Result<(), AppError> {
        for (field, value) in
            [("indicator_name", &self.indicator_name), ("indicator_code", &self.indicator_code)]
        {
            if value.contains('/') || value.contains('\\') || value.contains("..") {
                return Err(AppError::UnsafeIndicatorField {
                    path: path.to_string(),
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// `{indicator_name}_{indicator_code}_etl`
    pub fn dag_name(&self) -> String {
        format!("{}_{}_{}", self.indicator_name, self.indicator_code, DAG_NAME_SUFFIX)
    }

    /// Output file name for the generated DAG, e.g. `wine_001_etl.py`.
    pub fn output_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.dag_name(), extension)
    }
}

/// A config together with the file it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedIndicator {
    /// File name inside the config directory (e.g. `wine_001.json`).
    pub file_name: String,
    /// Config-directory-qualified path (e.g. `dags/config/wine_001.json`).
    pub config_path: String,
    pub config: IndicatorConfig,
}
