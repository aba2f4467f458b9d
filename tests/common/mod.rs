//! Shared testing utilities for dagsmith CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "CONFIG_FILE = \"<config_file>\"\nDAG_ID = \"<dag_name>\"\n";

/// Testing harness providing an isolated project directory.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment with the default template and an empty config directory.
    pub fn with_template() -> Self {
        let ctx = Self::new();
        ctx.write_file("dags/template/etl_template.py.jinja", TEMPLATE);
        fs::create_dir_all(ctx.config_dir()).expect("Failed to create config directory");
        ctx
    }

    /// Path to the project root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dagsmith` binary within the project.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `dagsmith` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("dagsmith").expect("Failed to locate dagsmith binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path()).env_remove("DAGSMITH_LOG");
        cmd
    }

    pub fn config_dir(&self) -> PathBuf {
        self.work_dir.join("dags/config")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("dags/etl")
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Write an indicator config into the config directory.
    pub fn write_config(&self, file_name: &str, name: &str, code: &str) {
        self.write_file(
            &format!("dags/config/{}", file_name),
            &format!(r#"{{"indicator_name": "{}", "indicator_code": "{}"}}"#, name, code),
        );
    }

    /// Read a generated file from the output directory.
    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_dir().join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", file_name, e))
    }

    /// Names of files in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into())
            .collect();
        names.sort();
        names
    }
}
