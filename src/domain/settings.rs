//! Project settings (`dagsmith.toml`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AppError;
use super::dag_template::PlaceholderTokens;

/// Settings file name at the project root.
pub const SETTINGS_FILE: &str = "dagsmith.toml";

/// Project settings. Every section is optional and falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GeneratorSettings {
    pub paths: PathSettings,
    pub output: OutputSettings,
    pub placeholders: PlaceholderTokens,
    pub schedule: ScheduleSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PathSettings {
    /// Directory scanned for indicator configs.
    pub config_dir: String,
    /// DAG template file.
    pub template: String,
    /// Directory receiving generated DAG files.
    pub output_dir: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            config_dir: "dags/config".into(),
            template: "dags/template/etl_template.py.jinja".into(),
            output_dir: "dags/etl".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputSettings {
    /// Extension of generated files, without the leading dot.
    pub extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { extension: "py".into() }
    }
}

/// Schedule metadata of the generator DAG itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScheduleSettings {
    pub dag_id: String,
    pub cron: String,
    pub start_date: NaiveDate,
    pub catchup: bool,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            dag_id: "generate_etl_dags".into(),
            cron: "* * * * *".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 11, 27).unwrap_or_default(),
            catchup: false,
        }
    }
}

/// Config files are recognized by this extension.
pub const CONFIG_EXTENSION: &str = ".json";

impl GeneratorSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let settings: GeneratorSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let tokens = &self.placeholders;
        if tokens.config_file.is_empty() || tokens.dag_name.is_empty() {
            return Err(AppError::settings("placeholder tokens must not be empty"));
        }
        if tokens.config_file == tokens.dag_name {
            return Err(AppError::settings(format!(
                "placeholder tokens must differ (both are '{}')",
                tokens.config_file
            )));
        }

        let extension = &self.output.extension;
        if extension.is_empty() || extension.starts_with('.') {
            return Err(AppError::settings(format!(
                "output.extension must be non-empty and have no leading dot, got '{}'",
                extension
            )));
        }

        for (key, value) in [
            ("paths.config_dir", &self.paths.config_dir),
            ("paths.template", &self.paths.template),
            ("paths.output_dir", &self.paths.output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::settings(format!("{} must not be empty", key)));
            }
        }

        if self.schedule.dag_id.trim().is_empty() {
            return Err(AppError::settings("schedule.dag_id must not be empty"));
        }
        let fields = self.schedule.cron.split_whitespace().count();
        if fields != 5 {
            return Err(AppError::settings(format!(
                "schedule.cron must have 5 fields, got {} in '{}'",
                fields, self.schedule.cron
            )));
        }

        Ok(())
    }

    /// Config-directory-qualified path for a config file name.
    pub fn config_path(&self, file_name: &str) -> String {
        join_relative(&self.paths.config_dir, file_name)
    }

    /// Output-directory-qualified path for a generated file name.
    pub fn output_path(&self, file_name: &str) -> String {
        join_relative(&self.paths.output_dir, file_name)
    }
}

fn join_relative(dir: &str, file_name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        return file_name.to_string();
    }
    format!("{}/{}", dir, file_name)
}
