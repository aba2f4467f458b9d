//! dagsmith: generate ETL workflow definitions from indicator configs.
//!
//! Each `*.json` config in the config directory names an indicator
//! (`indicator_name`, `indicator_code`). `generate` renders the DAG template
//! for every config by replacing two literal placeholder tokens and writes
//! `{indicator_name}_{indicator_code}_etl.<ext>` into the output directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOptions, CheckOutcome, GenerateOptions, GenerateOutcome, GeneratedDag, InitOutcome,
};
pub use domain::{AppError, GeneratorPlan, GeneratorSettings, IndicatorConfig};
