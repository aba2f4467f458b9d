//! Task graph the orchestration host builds around the generator.
//!
//! Layout: `latestOnly -> start -> {group}.{name}_dummy -> {group}.{code}`,
//! with one group per distinct indicator name.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::AppError;
use super::indicator::LoadedIndicator;
use super::settings::ScheduleSettings;
use super::task_groups::TaskGroupRegistry;

pub const LATEST_ONLY_TASK: &str = "latestOnly";
pub const START_TASK: &str = "start";

/// Role of a task in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// No-op ordering node.
    Marker,
    /// No-op anchor heading a group.
    GroupAnchor,
    /// Renders one indicator config into a DAG file.
    Generate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedTask {
    /// Fully qualified id (`group.task` inside a group).
    pub id: String,
    pub kind: TaskKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dag_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedGroup {
    pub group_id: String,
    pub anchor: PlannedTask,
    pub tasks: Vec<PlannedTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PlanEdge {
    pub upstream: String,
    pub downstream: String,
}

/// Serializable description of the generator DAG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorPlan {
    pub dag_id: String,
    pub schedule: String,
    pub start_date: NaiveDate,
    pub catchup: bool,
    pub markers: Vec<PlannedTask>,
    pub groups: Vec<PlannedGroup>,
    pub edges: Vec<PlanEdge>,
}

impl GeneratorPlan {
    /// Build the plan from loaded configs, in the order given.
    pub fn build(
        schedule: &ScheduleSettings,
        indicators: &[LoadedIndicator],
    ) -> Result<Self, AppError> {
        let mut registry = TaskGroupRegistry::new();
        let mut groups: Vec<PlannedGroup> = Vec::new();
        let mut edges = BTreeSet::new();

        edges.insert(edge(LATEST_ONLY_TASK, START_TASK));

        for indicator in indicators {
            let name = &indicator.config.indicator_name;
            let handle = registry.ensure(name);
            if handle.index() == groups.len() {
                groups.push(PlannedGroup {
                    group_id: name.clone(),
                    anchor: PlannedTask {
                        id: qualified(name, &format!("{}_dummy", name)),
                        kind: TaskKind::GroupAnchor,
                        config_path: None,
                        dag_name: None,
                    },
                    tasks: Vec::new(),
                });
            }

            let group = &mut groups[handle.index()];
            let task_id = qualified(name, &indicator.config.indicator_code);
            if group.tasks.iter().any(|task| task.id == task_id) {
                return Err(AppError::DuplicateTask {
                    group: name.clone(),
                    task: indicator.config.indicator_code.clone(),
                    path: indicator.config_path.clone(),
                });
            }

            edges.insert(edge(START_TASK, &group.anchor.id));
            edges.insert(edge(&group.anchor.id, &task_id));
            group.tasks.push(PlannedTask {
                id: task_id,
                kind: TaskKind::Generate,
                config_path: Some(indicator.config_path.clone()),
                dag_name: Some(indicator.config.dag_name()),
            });

            tracing::debug!(
                indicator_name = %name,
                indicator_code = %indicator.config.indicator_code,
                "configured task"
            );
        }

        Ok(Self {
            dag_id: schedule.dag_id.clone(),
            schedule: schedule.cron.clone(),
            start_date: schedule.start_date,
            catchup: schedule.catchup,
            markers: vec![marker(LATEST_ONLY_TASK), marker(START_TASK)],
            groups,
            edges: edges.into_iter().collect(),
        })
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|group| group.tasks.len()).sum()
    }

    /// Human-readable tree rendering.
    pub fn render_tree(&self) -> String {
        let mut out = format!(
            "{} (schedule: {}, start: {}, catchup: {})\n",
            self.dag_id, self.schedule, self.start_date, self.catchup
        );
        out.push_str(&format!("└─ {}\n   └─ {}\n", LATEST_ONLY_TASK, START_TASK));

        for (index, group) in self.groups.iter().enumerate() {
            let last_group = index + 1 == self.groups.len();
            let (branch, indent) = if last_group { ("└─", "   ") } else { ("├─", "│  ") };
            out.push_str(&format!("      {} [{}] {}\n", branch, group.group_id, group.anchor.id));
            for (task_index, task) in group.tasks.iter().enumerate() {
                let last_task = task_index + 1 == group.tasks.len();
                let task_branch = if last_task { "└─" } else { "├─" };
                let dag = task.dag_name.as_deref().unwrap_or_default();
                out.push_str(&format!(
                    "      {}   {} {} -> {}\n",
                    indent, task_branch, task.id, dag
                ));
            }
        }

        out
    }
}

fn qualified(group: &str, task: &str) -> String {
    format!("{}.{}", group, task)
}

fn marker(id: &str) -> PlannedTask {
    PlannedTask { id: id.to_string(), kind: TaskKind::Marker, config_path: None, dag_name: None }
}

fn edge(upstream: &str, downstream: &str) -> PlanEdge {
    PlanEdge { upstream: upstream.to_string(), downstream: downstream.to_string() }
}
