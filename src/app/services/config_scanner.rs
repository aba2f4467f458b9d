//! Discovery and loading of indicator configs.

use crate::domain::{AppError, CONFIG_EXTENSION, GeneratorSettings, IndicatorConfig, LoadedIndicator};
use crate::ports::ProjectFilesystem;

/// Config file names in the config directory, sorted.
pub fn discover_config_files(
    fs: &impl ProjectFilesystem,
    settings: &GeneratorSettings,
) -> Result<Vec<String>, AppError> {
    let config_dir = &settings.paths.config_dir;
    if !fs.is_dir(config_dir) {
        return Err(AppError::ConfigDirNotFound(config_dir.clone()));
    }

    Ok(fs
        .list_files(config_dir)?
        .into_iter()
        .filter(|name| name.ends_with(CONFIG_EXTENSION))
        .collect())
}

/// Load every config (or only `only`) before anything else happens.
///
/// The first unreadable or malformed config aborts the whole scan.
pub fn load_indicators(
    fs: &impl ProjectFilesystem,
    settings: &GeneratorSettings,
    only: Option<&str>,
) -> Result<Vec<LoadedIndicator>, AppError> {
    let mut file_names = discover_config_files(fs, settings)?;

    if let Some(only) = only {
        if !file_names.iter().any(|name| name == only) {
            return Err(AppError::ConfigNotFound(settings.config_path(only)));
        }
        file_names.retain(|name| name == only);
    }

    file_names.into_iter().map(|file_name| load_indicator(fs, settings, file_name)).collect()
}

fn load_indicator(
    fs: &impl ProjectFilesystem,
    settings: &GeneratorSettings,
    file_name: String,
) -> Result<LoadedIndicator, AppError> {
    let config_path = settings.config_path(&file_name);
    let content = fs.read_file(&config_path)?;
    let config = IndicatorConfig::from_json(&content, &config_path)?;
    tracing::debug!(path = %config_path, dag_name = %config.dag_name(), "loaded indicator config");

    Ok(LoadedIndicator { file_name, config_path, config })
}
