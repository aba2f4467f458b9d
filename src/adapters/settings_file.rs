//! Loads `dagsmith.toml` from the project root.

use crate::domain::{AppError, GeneratorSettings, SETTINGS_FILE};
use crate::ports::ProjectFilesystem;

/// Load project settings, falling back to defaults when the file is absent.
pub fn load_settings(fs: &impl ProjectFilesystem) -> Result<GeneratorSettings, AppError> {
    if !fs.file_exists(SETTINGS_FILE) {
        tracing::debug!("{} not found, using default settings", SETTINGS_FILE);
        return Ok(GeneratorSettings::default());
    }

    let content = fs.read_file(SETTINGS_FILE)?;
    GeneratorSettings::from_toml(&content)
}
