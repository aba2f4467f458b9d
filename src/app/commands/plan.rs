//! Plan command: describe the generator task graph without writing files.

use crate::app::AppContext;
use crate::app::services::config_scanner::load_indicators;
use crate::domain::{AppError, GeneratorPlan};
use crate::ports::ProjectFilesystem;

/// Execute the plan command.
pub fn execute<F: ProjectFilesystem>(ctx: &AppContext<F>) -> Result<GeneratorPlan, AppError> {
    let indicators = load_indicators(ctx.fs(), ctx.settings(), None)?;
    GeneratorPlan::build(&ctx.settings().schedule, &indicators)
}
