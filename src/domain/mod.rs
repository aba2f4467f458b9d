pub mod dag_template;
pub mod error;
pub mod generator_plan;
pub mod indicator;
pub mod settings;
pub mod task_groups;

pub use dag_template::{DagTemplate, PlaceholderTokens};
pub use error::AppError;
pub use generator_plan::{GeneratorPlan, PlanEdge, PlannedGroup, PlannedTask, TaskKind};
pub use indicator::{IndicatorConfig, LoadedIndicator};
pub use settings::{CONFIG_EXTENSION, GeneratorSettings, SETTINGS_FILE};
pub use task_groups::{GroupHandle, TaskGroupRegistry};
