//! Reads the DAG template named in settings.

use crate::domain::{AppError, DagTemplate, GeneratorSettings};
use crate::ports::ProjectFilesystem;

pub fn load_template(
    fs: &impl ProjectFilesystem,
    settings: &GeneratorSettings,
) -> Result<DagTemplate, AppError> {
    let path = &settings.paths.template;
    if !fs.file_exists(path) {
        return Err(AppError::TemplateNotFound(path.clone()));
    }

    let text = fs.read_file(path)?;
    Ok(DagTemplate::new(text, settings.placeholders.clone()))
}
