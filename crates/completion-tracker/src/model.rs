//! Checklist Model
//!
//! Structure is fixed at construction; `Subtask::completed` is the only
//! field that changes afterwards.

use serde::{Deserialize, Serialize};

/// Leaf unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Unique within its task
    pub id: String,
    pub label: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            completed: false,
        }
    }
}

/// A group of subtasks. Completion is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within its category
    pub id: String,
    pub title: String,
    pub description: String,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        subtasks: Vec<Subtask>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            subtasks,
        }
    }

    /// All subtasks done. A task without subtasks is never complete.
    pub fn is_complete(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|st| st.completed)
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|st| st.completed).count()
    }

    pub fn subtask(&self, subtask_id: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|st| st.id == subtask_id)
    }
}

/// Named group of tasks, no completion semantics beyond rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique within the tree
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks,
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// "1 task" / "3 tasks"
    pub fn task_count_label(&self) -> String {
        match self.tasks.len() {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }
}

/// Address of one subtask: (category, task, subtask)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtaskPath {
    pub category_id: String,
    pub task_id: String,
    pub subtask_id: String,
}

impl SubtaskPath {
    pub fn new(
        category_id: impl Into<String>,
        task_id: impl Into<String>,
        subtask_id: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            task_id: task_id.into(),
            subtask_id: subtask_id.into(),
        }
    }
}

impl std::fmt::Display for SubtaskPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.category_id, self.task_id, self.subtask_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(states: &[bool]) -> Task {
        let subtasks = states
            .iter()
            .enumerate()
            .map(|(i, done)| Subtask {
                id: format!("st-{}", i + 1),
                label: format!("Step {}", i + 1),
                completed: *done,
            })
            .collect();
        Task::new("task-1", "Task", "", subtasks)
    }

    #[test]
    fn test_task_complete_only_when_all_subtasks_done() {
        assert!(!task_with(&[true, false]).is_complete());
        assert!(task_with(&[true, true]).is_complete());
    }

    #[test]
    fn test_empty_task_is_never_complete() {
        assert!(!task_with(&[]).is_complete());
    }

    #[test]
    fn test_task_count_label() {
        let one = Category::new("c", "C", vec![task_with(&[false])]);
        let none = Category::new("c", "C", vec![]);
        assert_eq!(one.task_count_label(), "1 task");
        assert_eq!(none.task_count_label(), "0 tasks");
    }

    #[test]
    fn test_path_display() {
        let path = SubtaskPath::new("cat-1", "task-1", "st-2");
        assert_eq!(path.to_string(), "cat-1/task-1/st-2");
    }
}
