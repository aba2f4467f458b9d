//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Every `*_at` function takes the project root.

use std::path::PathBuf;

use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::settings_file::load_settings;
use crate::app::{
    AppContext,
    commands::{check, generate, init, plan},
};

pub use crate::app::commands::check::{CheckOptions, CheckOutcome, Diagnostic, Severity};
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome, GeneratedDag};
pub use crate::app::commands::init::InitOutcome;
pub use crate::domain::{AppError, GeneratorPlan, GeneratorSettings};

/// Create an `AppContext` for a project root, loading its settings.
fn create_context(path: PathBuf) -> Result<AppContext<FilesystemStore>, AppError> {
    let fs = FilesystemStore::new(path);
    let settings = load_settings(&fs)?;
    Ok(AppContext::new(fs, settings))
}

/// Write the starter project into the current directory.
pub fn init() -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?)
}

/// Write the starter project at the specified path.
pub fn init_at(path: impl Into<PathBuf>) -> Result<InitOutcome, AppError> {
    let path = path.into();
    std::fs::create_dir_all(&path)?;
    init::execute(&FilesystemStore::new(path))
}

/// Generate DAG files for the project in the current directory.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Generate DAG files for the project at the specified path.
pub fn generate_at(
    path: impl Into<PathBuf>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(path.into())?;
    generate::execute(&ctx, options)
}

/// Describe the generator task graph for the project at the specified path.
pub fn plan_at(path: impl Into<PathBuf>) -> Result<GeneratorPlan, AppError> {
    let ctx = create_context(path.into())?;
    plan::execute(&ctx)
}

/// Validate the project at the specified path.
pub fn check_at(path: impl Into<PathBuf>, options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(&FilesystemStore::new(path.into()), options)
}
