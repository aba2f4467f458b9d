//! Init command: write the starter project.

use serde::Serialize;

use crate::adapters::assets::scaffold_files;
use crate::domain::{AppError, SETTINGS_FILE};
use crate::ports::ProjectFilesystem;

#[derive(Debug, Clone, Default, Serialize)]
pub struct InitOutcome {
    /// Files written, relative to the project root.
    pub created: Vec<String>,
    /// Starter files left alone because they already existed.
    pub skipped: Vec<String>,
}

/// Execute the init command.
///
/// Refuses to run when `dagsmith.toml` exists. Other starter files are only
/// written when absent.
pub fn execute<F: ProjectFilesystem>(fs: &F) -> Result<InitOutcome, AppError> {
    if fs.file_exists(SETTINGS_FILE) {
        return Err(AppError::ProjectExists(SETTINGS_FILE.to_string()));
    }

    let mut outcome = InitOutcome::default();
    for file in scaffold_files()? {
        if fs.file_exists(&file.path) {
            outcome.skipped.push(file.path);
            continue;
        }
        if let Some((parent, _)) = file.path.rsplit_once('/') {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&file.path, &file.content)?;
        outcome.created.push(file.path);
    }

    Ok(outcome)
}
