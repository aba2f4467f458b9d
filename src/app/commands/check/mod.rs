//! Check command: validate the project layout, template and configs.

mod diagnostics;

use std::collections::HashMap;

use minijinja::{Environment, context};
use serde::Serialize;

use crate::adapters::settings_file::load_settings;
use crate::app::services::template_loader::load_template;
use crate::domain::{AppError, CONFIG_EXTENSION, GeneratorSettings, IndicatorConfig, SETTINGS_FILE};
use crate::ports::ProjectFilesystem;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
    pub diagnostics: Vec<Diagnostic>,
}

/// Execute the check command.
///
/// Problems are collected as diagnostics rather than returned as errors;
/// only I/O failures while listing abort the check.
pub fn execute<F: ProjectFilesystem>(
    fs: &F,
    options: &CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let mut diagnostics = Diagnostics::default();

    match load_settings(fs) {
        Ok(settings) => {
            check_template(fs, &settings, &mut diagnostics);
            check_configs(fs, &settings, &mut diagnostics)?;
        }
        Err(err) => diagnostics.push_error(SETTINGS_FILE, err.to_string()),
    }

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    Ok(CheckOutcome { errors, warnings, exit_code, diagnostics: diagnostics.into_vec() })
}

fn check_template<F: ProjectFilesystem>(
    fs: &F,
    settings: &GeneratorSettings,
    diagnostics: &mut Diagnostics,
) {
    let path = &settings.paths.template;
    let template = match load_template(fs, settings) {
        Ok(template) => template,
        Err(err) => {
            diagnostics.push_error(path.as_str(), err.to_string());
            return;
        }
    };

    for token in template.missing_tokens() {
        diagnostics.push_warning(path.as_str(), format!("placeholder '{}' never occurs", token));
    }

    let env = Environment::new();
    let compiled = match env.template_from_str(template.text()) {
        Ok(compiled) => compiled,
        Err(err) => {
            diagnostics.push_warning(path.as_str(), format!("not a valid Jinja template: {}", err));
            return;
        }
    };
    match compiled.render(context! {}) {
        Ok(rendered) if rendered.trim().is_empty() => {
            diagnostics.push_warning(path.as_str(), "template renders to empty text")
        }
        Ok(_) => {}
        Err(err) => {
            diagnostics.push_warning(path.as_str(), format!("template fails to render: {}", err))
        }
    }
}

fn check_configs<F: ProjectFilesystem>(
    fs: &F,
    settings: &GeneratorSettings,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    let config_dir = &settings.paths.config_dir;
    if !fs.is_dir(config_dir) {
        diagnostics.push_error(config_dir.as_str(), "config directory not found");
        return Ok(());
    }

    let file_names = fs.list_files(config_dir)?;
    // (name, code) -> first config path, and output file -> first config path.
    let mut pairs: HashMap<(String, String), String> = HashMap::new();
    let mut outputs: HashMap<String, String> = HashMap::new();
    let mut json_count = 0;

    for file_name in &file_names {
        let path = settings.config_path(file_name);

        if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
            check_yaml(fs, &path, diagnostics);
            continue;
        }
        if !file_name.ends_with(CONFIG_EXTENSION) {
            continue;
        }

        json_count += 1;
        let config = match fs.read_file(&path).and_then(|c| IndicatorConfig::from_json(&c, &path))
        {
            Ok(config) => config,
            Err(err) => {
                diagnostics.push_error(path.as_str(), err.to_string());
                continue;
            }
        };

        let output = config.output_file_name(&settings.output.extension);
        let pair = (config.indicator_name.clone(), config.indicator_code.clone());
        if let Some(first_path) = pairs.get(&pair) {
            diagnostics.push_error(
                path.as_str(),
                format!(
                    "duplicate task '{}' in group '{}' (also defined in {})",
                    config.indicator_code, config.indicator_name, first_path
                ),
            );
            continue;
        }
        pairs.insert(pair, path.clone());

        match outputs.get(&output) {
            Some(first_path) => diagnostics.push_warning(
                path.as_str(),
                format!("writes {} which {} also writes", output, first_path),
            ),
            None => {
                outputs.insert(output, path);
            }
        }
    }

    if json_count == 0 {
        diagnostics.push_error(
            config_dir.as_str(),
            format!("no {} config found", CONFIG_EXTENSION.trim_start_matches('.')),
        );
    }

    Ok(())
}

fn check_yaml<F: ProjectFilesystem>(fs: &F, path: &str, diagnostics: &mut Diagnostics) {
    let content = match fs.read_file(path) {
        Ok(content) => content,
        Err(err) => {
            diagnostics.push_warning(path, err.to_string());
            return;
        }
    };

    match serde_yaml::from_str::<serde_yaml::Value>(&content) {
        Ok(serde_yaml::Value::Mapping(_)) => {}
        Ok(_) => diagnostics.push_warning(path, "YAML file is not a mapping"),
        Err(err) => diagnostics.push_warning(path, format!("invalid YAML: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryProjectFilesystem;

    const TEMPLATE_PATH: &str = "dags/template/etl_template.py.jinja";

    fn healthy_project() -> MemoryProjectFilesystem {
        let fs = MemoryProjectFilesystem::new();
        fs.add_file(TEMPLATE_PATH, "CONFIG = '<config_file>'\ndag_id = '<dag_name>'\n");
        fs.add_file("dags/config/wine.json", r#"{"indicator_name":"wine","indicator_code":"001"}"#);
        fs
    }

    fn run(fs: &MemoryProjectFilesystem, strict: bool) -> CheckOutcome {
        execute(fs, &CheckOptions { strict }).unwrap()
    }

    #[test]
    fn healthy_project_passes() {
        let outcome = run(&healthy_project(), true);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.warnings, 0);
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn missing_template_is_an_error() {
        let fs = MemoryProjectFilesystem::new();
        fs.add_file("dags/config/wine.json", r#"{"indicator_name":"wine","indicator_code":"001"}"#);

        let outcome = run(&fs, false);
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.diagnostics[0].file, TEMPLATE_PATH);
    }

    #[test]
    fn empty_config_dir_is_an_error() {
        let fs = MemoryProjectFilesystem::new();
        fs.add_file(TEMPLATE_PATH, "<config_file> <dag_name>");
        fs.add_dir("dags/config");

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 1);
        assert!(outcome.diagnostics[0].message.contains("no json config found"));
    }

    #[test]
    fn malformed_configs_are_all_reported() {
        let fs = healthy_project();
        fs.add_file("dags/config/a.json", "{");
        fs.add_file("dags/config/b.json", r#"{"indicator_name":"b"}"#);

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 2);
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn missing_placeholder_is_a_warning_failing_only_in_strict_mode() {
        let fs = healthy_project();
        fs.add_file(TEMPLATE_PATH, "dag_id = '<dag_name>'\n");

        let relaxed = run(&fs, false);
        assert_eq!(relaxed.warnings, 1);
        assert_eq!(relaxed.exit_code, 0);
        assert!(relaxed.diagnostics[0].message.contains("<config_file>"));

        assert_eq!(run(&fs, true).exit_code, 2);
    }

    #[test]
    fn broken_jinja_syntax_is_a_warning() {
        let fs = healthy_project();
        fs.add_file(TEMPLATE_PATH, "<config_file> <dag_name> {% if %}");

        let outcome = run(&fs, false);
        assert_eq!(outcome.warnings, 1);
        assert!(outcome.diagnostics[0].message.contains("Jinja"));
    }

    #[test]
    fn template_rendering_to_nothing_is_a_warning() {
        let fs = healthy_project();
        fs.add_file(TEMPLATE_PATH, "{% if false %}<config_file> <dag_name>{% endif %}\n");

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.warnings, 1);
        assert!(outcome.diagnostics[0].message.contains("renders to empty text"));
    }

    #[test]
    fn yaml_files_must_be_mappings() {
        let fs = healthy_project();
        fs.add_file("dags/config/ok.yaml", "indicator_name: wine\n");
        fs.add_file("dags/config/list.yml", "- a\n- b\n");

        let outcome = run(&fs, false);
        assert_eq!(outcome.warnings, 1);
        assert_eq!(outcome.diagnostics[0].file, "dags/config/list.yml");
    }

    #[test]
    fn identical_pairs_are_duplicate_tasks() {
        let fs = healthy_project();
        fs.add_file(
            "dags/config/wine_copy.json",
            r#"{"indicator_name":"wine","indicator_code":"001"}"#,
        );

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 1);
        assert!(outcome.diagnostics[0].message.contains("duplicate task '001'"));
    }

    #[test]
    fn different_pairs_with_same_output_are_warned() {
        let fs = healthy_project();
        fs.add_file("dags/config/a.json", r#"{"indicator_name":"a_b","indicator_code":"c"}"#);
        fs.add_file("dags/config/b.json", r#"{"indicator_name":"a","indicator_code":"b_c"}"#);

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.warnings, 1);
        assert!(outcome.diagnostics[0].message.contains("a_b_c_etl.py"));
    }

    #[test]
    fn repeated_pair_behind_an_output_collision_is_still_a_duplicate() {
        let fs = healthy_project();
        fs.add_file("dags/config/a.json", r#"{"indicator_name":"a_b","indicator_code":"c"}"#);
        fs.add_file("dags/config/b.json", r#"{"indicator_name":"a","indicator_code":"b_c"}"#);
        fs.add_file("dags/config/c.json", r#"{"indicator_name":"a","indicator_code":"b_c"}"#);

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.warnings, 1);
        assert_eq!(outcome.exit_code, 1);
        let error = outcome.diagnostics.iter().find(|d| d.severity == Severity::Error).unwrap();
        assert_eq!(error.file, "dags/config/c.json");
        assert!(error.message.contains("also defined in dags/config/b.json"));
    }

    #[test]
    fn unsafe_indicator_name_is_an_error() {
        let fs = healthy_project();
        fs.add_file(
            "dags/config/fruit.json",
            r#"{"indicator_name":"fruit/wine","indicator_code":"001"}"#,
        );

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.diagnostics[0].file, "dags/config/fruit.json");
        assert!(outcome.diagnostics[0].message.contains("'fruit/wine' must not contain"));
    }

    #[test]
    fn invalid_settings_stop_the_check() {
        let fs = healthy_project();
        fs.add_file(SETTINGS_FILE, "[output]\nextension = \".py\"\n");

        let outcome = run(&fs, false);
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.diagnostics[0].file, SETTINGS_FILE);
    }
}
