//! Init command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init(root: PathBuf) -> Result<(), AppError> {
    let outcome = crate::app::api::init_at(root)?;

    println!("✅ Initialized dagsmith project");
    for path in &outcome.created {
        println!("  created {}", path);
    }
    for path in &outcome.skipped {
        println!("  kept existing {}", path);
    }
    Ok(())
}
