//! Completion Tracker
//!
//! Owns the checklist tree. Subtask toggles are the only mutation; every
//! metric is walked from leaf state on read.

use serde::{Deserialize, Serialize};

use crate::config::CockpitConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::level::ProgressLevel;
use crate::model::{Category, Subtask, SubtaskPath, Task};
use crate::notify::{fire, Notification, Notifier};
use crate::rollup::{completion_percent, task_percent, Kpis};
use crate::seed::seed_categories;

/// How a toggle changed the owning task's completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskTransition {
    /// Incomplete before, complete after
    Completed,
    /// Complete before, incomplete after
    Reopened,
    /// Same completion before and after
    Unchanged,
}

impl TaskTransition {
    fn between(was_complete: bool, is_complete: bool) -> Self {
        match (was_complete, is_complete) {
            (false, true) => TaskTransition::Completed,
            (true, false) => TaskTransition::Reopened,
            _ => TaskTransition::Unchanged,
        }
    }
}

/// Result of a resolved toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    /// New value of the subtask's flag
    pub completed: bool,
    pub transition: TaskTransition,
    /// Title of the owning task
    pub task_title: String,
}

/// Category → task → subtask tree plus rollup policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    categories: Vec<Category>,
    config: CockpitConfig,
    revision: u64,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::seeded(CockpitConfig::default())
    }
}

impl Tracker {
    pub fn new(categories: Vec<Category>, config: CockpitConfig) -> Self {
        Self {
            categories,
            config,
            revision: 0,
        }
    }

    /// Tracker over the fixed seed dataset
    pub fn seeded(config: CockpitConfig) -> Self {
        Self::new(seed_categories(), config)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn config(&self) -> CockpitConfig {
        self.config
    }

    /// Bumped on every successful toggle
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn task(&self, category_id: &str, task_id: &str) -> Option<&Task> {
        self.category(category_id)?.task(task_id)
    }

    pub fn subtask(&self, path: &SubtaskPath) -> Option<&Subtask> {
        self.task(&path.category_id, &path.task_id)?.subtask(&path.subtask_id)
    }

    /// Flip one subtask and notify on the task's rising edge.
    ///
    /// An unresolved path leaves the tree untouched, fires nothing, and
    /// returns `None`.
    pub fn toggle_subtask(&mut self, path: &SubtaskPath, notifier: &dyn Notifier) -> Option<ToggleOutcome> {
        let outcome = match self.apply_toggle(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("[TRACKER] toggle ignored: {}", e);
                return None;
            }
        };
        self.revision += 1;

        log::info!(
            "[TRACKER] {} -> {} ({:?}), overall {}%",
            path,
            outcome.completed,
            outcome.transition,
            self.overall_percent()
        );

        let notification = match outcome.transition {
            TaskTransition::Completed => Notification::TaskCompleted {
                title: outcome.task_title.clone(),
            },
            TaskTransition::Reopened | TaskTransition::Unchanged => Notification::NeutralToggle,
        };
        fire(notifier, notification);

        Some(outcome)
    }

    fn apply_toggle(&mut self, path: &SubtaskPath) -> TrackerResult<ToggleOutcome> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == path.category_id)
            .ok_or_else(|| TrackerError::UnknownCategory(path.category_id.clone()))?;

        let task = category
            .tasks
            .iter_mut()
            .find(|t| t.id == path.task_id)
            .ok_or_else(|| TrackerError::UnknownTask {
                category_id: path.category_id.clone(),
                task_id: path.task_id.clone(),
            })?;

        let was_complete = task.is_complete();

        let subtask = task
            .subtasks
            .iter_mut()
            .find(|st| st.id == path.subtask_id)
            .ok_or_else(|| TrackerError::UnknownSubtask {
                category_id: path.category_id.clone(),
                task_id: path.task_id.clone(),
                subtask_id: path.subtask_id.clone(),
            })?;
        subtask.completed = !subtask.completed;
        let completed = subtask.completed;

        Ok(ToggleOutcome {
            completed,
            transition: TaskTransition::between(was_complete, task.is_complete()),
            task_title: task.title.clone(),
        })
    }

    /// Subtask-granular percent of one task, 0 if it does not exist
    pub fn task_percent(&self, category_id: &str, task_id: &str) -> u8 {
        self.task(category_id, task_id).map(task_percent).unwrap_or(0)
    }

    /// Whether every subtask of the task is done. The rounded percent can
    /// read 100 before this holds.
    pub fn task_complete(&self, category_id: &str, task_id: &str) -> bool {
        self.task(category_id, task_id).map(Task::is_complete).unwrap_or(false)
    }

    /// Rollup over one category, 0 if it does not exist
    pub fn category_percent(&self, category_id: &str) -> u8 {
        self.category(category_id)
            .map(|c| completion_percent(&c.tasks, self.config.rollup))
            .unwrap_or(0)
    }

    /// Rollup over every task in the tree
    pub fn overall_percent(&self) -> u8 {
        completion_percent(
            self.categories.iter().flat_map(|c| c.tasks.iter()),
            self.config.rollup,
        )
    }

    pub fn progress_level(&self) -> ProgressLevel {
        ProgressLevel::new(self.overall_percent(), self.config.thresholds, self.config.direction)
    }

    pub fn kpis(&self) -> Kpis {
        Kpis::from_categories(&self.categories)
    }

    /// JSON snapshot of the tree for debugging
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.categories).unwrap_or_default()
    }
}
