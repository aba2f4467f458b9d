//! Check command implementation.

use std::path::PathBuf;

use crate::app::api::{CheckOptions, Severity};
use crate::app::commands::output::write_json_output;
use crate::domain::AppError;

pub fn run_check(root: PathBuf, strict: bool, json: bool) -> Result<i32, AppError> {
    let outcome = crate::app::api::check_at(root, &CheckOptions { strict })?;

    if json {
        write_json_output(&outcome)?;
        return Ok(outcome.exit_code);
    }

    for diagnostic in &outcome.diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        eprintln!("[{}] {}: {}", label, diagnostic.file, diagnostic.message);
    }

    if outcome.errors == 0 && outcome.warnings == 0 {
        println!("✅ Project is valid");
    } else {
        println!("{} error(s), {} warning(s)", outcome.errors, outcome.warnings);
    }

    Ok(outcome.exit_code)
}
