//! Rollup Arithmetic
//!
//! Percentages are recomputed from leaf state on every call.

use serde::{Deserialize, Serialize};

use crate::config::RollupGranularity;
use crate::model::{Category, Task};

/// `round(100 * part / total)`, half-up, 0 when `total == 0`
pub fn percent_of(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((200 * part + total) / (2 * total)) as u8
}

/// Subtask-granular percent for the per-task ring
pub fn task_percent(task: &Task) -> u8 {
    percent_of(task.completed_subtasks(), task.subtasks.len())
}

/// Rollup over a sequence of tasks at the given granularity
pub fn completion_percent<'a, I>(tasks: I, granularity: RollupGranularity) -> u8
where
    I: IntoIterator<Item = &'a Task>,
{
    let (done, total) = tasks.into_iter().fold((0, 0), |(done, total), task| match granularity {
        RollupGranularity::Task => (done + usize::from(task.is_complete()), total + 1),
        RollupGranularity::Subtask => (
            done + task.completed_subtasks(),
            total + task.subtasks.len(),
        ),
    });
    percent_of(done, total)
}

/// Counts shown on the KPI tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_subtasks: usize,
    pub completed_subtasks: usize,
}

impl Kpis {
    pub fn from_categories(categories: &[Category]) -> Self {
        categories
            .iter()
            .flat_map(|cat| cat.tasks.iter())
            .fold(Self::default(), |mut k, task| {
                k.total_tasks += 1;
                k.completed_tasks += usize::from(task.is_complete());
                k.total_subtasks += task.subtasks.len();
                k.completed_subtasks += task.completed_subtasks();
                k
            })
    }

    pub fn open_subtasks(&self) -> usize {
        self.total_subtasks - self.completed_subtasks
    }
}
