//! Plan command implementation.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::app::commands::output::write_json_output;
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Tree,
    Json,
}

pub fn run_plan(root: PathBuf, format: PlanFormat) -> Result<(), AppError> {
    let plan = crate::app::api::plan_at(root)?;

    match format {
        PlanFormat::Json => write_json_output(&plan),
        PlanFormat::Tree => {
            print!("{}", plan.render_tree());
            Ok(())
        }
    }
}
