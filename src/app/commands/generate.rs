//! Generate command: render one DAG file per indicator config.
//!
//! All configs are loaded and every output path is computed before the first
//! write, so a malformed or unsafe config leaves the output directory
//! untouched. Existing output files are removed and rewritten on every run.

use serde::Serialize;

use crate::app::AppContext;
use crate::app::services::config_scanner::load_indicators;
use crate::app::services::template_loader::load_template;
use crate::domain::{AppError, TaskGroupRegistry};
use crate::ports::ProjectFilesystem;

const SCHEMA_VERSION: u32 = 1;

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Restrict generation to one config file name inside the config directory.
    pub config_file: Option<String>,
}

/// One generated DAG file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDag {
    pub dag_name: String,
    pub indicator_name: String,
    pub indicator_code: String,
    pub config_path: String,
    pub output_path: String,
    /// Whether a previous file at `output_path` was removed first.
    pub replaced: bool,
}

/// Output of the generate command.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    /// Schema version for output format stability.
    pub schema_version: u32,
    pub output_dir: String,
    /// Number of distinct indicator groups seen.
    pub group_count: usize,
    pub generated: Vec<GeneratedDag>,
}

/// Execute the generate command.
pub fn execute<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let fs = ctx.fs();
    let settings = ctx.settings();

    fs.create_dir_all(&settings.paths.output_dir)?;

    let indicators = load_indicators(fs, settings, options.config_file.as_deref())?;
    let mut outcome = GenerateOutcome {
        schema_version: SCHEMA_VERSION,
        output_dir: settings.paths.output_dir.clone(),
        group_count: 0,
        generated: Vec::with_capacity(indicators.len()),
    };

    if indicators.is_empty() {
        tracing::info!(config_dir = %settings.paths.config_dir, "no indicator configs found");
        return Ok(outcome);
    }

    let template = load_template(fs, settings)?;
    let mut groups = TaskGroupRegistry::new();

    // Every output path and body is settled before the first remove or write.
    let mut pending = Vec::with_capacity(indicators.len());
    for indicator in indicators {
        let config = &indicator.config;
        groups.ensure(&config.indicator_name);

        let dag_name = config.dag_name();
        tracing::debug!(config_path = %indicator.config_path, "resolved config path");
        let content = template.render(&indicator.config_path, &dag_name);
        tracing::trace!(%dag_name, %content, "rendered DAG");

        let output_path =
            settings.output_path(&config.output_file_name(&settings.output.extension));
        let dag = GeneratedDag {
            dag_name,
            indicator_name: config.indicator_name.clone(),
            indicator_code: config.indicator_code.clone(),
            config_path: indicator.config_path,
            output_path,
            replaced: false,
        };
        pending.push((dag, content));
    }

    for (mut dag, content) in pending {
        dag.replaced = fs.remove_file(&dag.output_path)?;
        fs.write_file(&dag.output_path, &content)?;

        tracing::info!(
            indicator_name = %dag.indicator_name,
            indicator_code = %dag.indicator_code,
            path = %dag.output_path,
            "generated DAG"
        );
        outcome.generated.push(dag);
    }

    outcome.group_count = groups.len();
    Ok(outcome)
}
