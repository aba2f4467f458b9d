use crate::domain::GeneratorSettings;
use crate::ports::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem> {
    fs: F,
    settings: GeneratorSettings,
}

impl<F: ProjectFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(fs: F, settings: GeneratorSettings) -> Self {
        Self { fs, settings }
    }

    /// Get a reference to the project filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the loaded settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }
}
