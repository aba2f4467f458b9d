//! Generate command implementation.

use std::path::PathBuf;

use crate::app::api::GenerateOptions;
use crate::app::commands::output::write_json_output;
use crate::domain::AppError;

pub fn run_generate(root: PathBuf, config: Option<String>, json: bool) -> Result<(), AppError> {
    let options = GenerateOptions { config_file: config };
    let outcome = crate::app::api::generate_at(root, &options)?;

    if json {
        return write_json_output(&outcome);
    }

    if outcome.generated.is_empty() {
        println!("✅ No indicator configs found; nothing generated");
        return Ok(());
    }

    for dag in &outcome.generated {
        println!(
            "✅ Generated DAG for {} ({}) at {}",
            dag.indicator_name, dag.indicator_code, dag.output_path
        );
    }
    println!(
        "  {} file(s) across {} indicator group(s) in {}/",
        outcome.generated.len(),
        outcome.group_count,
        outcome.output_dir
    );
    Ok(())
}
