//! CLI Adapter.

mod check;
mod generate;
mod init;
mod plan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "dagsmith")]
#[command(version)]
#[command(
    about = "Generate ETL workflow definitions from indicator configs",
    long_about = None
)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(short = 'C', long = "project-dir", global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write dagsmith.toml, a DAG template and a sample config
    #[clap(visible_alias = "i")]
    Init,
    /// Render one DAG file per indicator config
    #[clap(visible_alias = "g")]
    Generate {
        /// Only generate from this config file (name inside the config directory)
        #[arg(short, long)]
        config: Option<String>,
        /// Print a single-line JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the generator task graph grouped by indicator name
    #[clap(visible_alias = "p")]
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value_t = plan::PlanFormat::Tree)]
        format: plan::PlanFormat,
    },
    /// Validate settings, template and configs
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Print a single-line JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = project_root(cli.project_dir).and_then(|root| {
        match cli.command {
            Commands::Init => init::run_init(root).map(|_| 0),
            Commands::Generate { config, json } => {
                generate::run_generate(root, config, json).map(|_| 0)
            }
            Commands::Plan { format } => plan::run_plan(root, format).map(|_| 0),
            Commands::Check { strict, json } => check::run_check(root, strict, json),
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn project_root(project_dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let cwd = std::env::current_dir()?;
    Ok(match project_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}
