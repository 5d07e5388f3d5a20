//! Seed Dataset
//!
//! The fixed tree every session starts from.

use crate::model::{Category, Subtask, Task};

pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(
            "cat-1",
            "Planning & Focus",
            vec![
                Task::new(
                    "task-1",
                    "Define key responsibilities",
                    "Capture what really matters for this role.",
                    vec![
                        Subtask::new("st-1", "List top 3–5 responsibilities"),
                        Subtask::new("st-2", "Clarify ownership and scope"),
                        Subtask::new("st-3", "Confirm with stakeholders"),
                    ],
                ),
                Task::new(
                    "task-2",
                    "Write role summary",
                    "Summarize impact in 2–3 sentences.",
                    vec![
                        Subtask::new("st-1", "Outline mission of the role"),
                        Subtask::new("st-2", "Describe main outcomes"),
                    ],
                ),
            ],
        ),
        Category::new(
            "cat-2",
            "Execution & Review",
            vec![Task::new(
                "task-3",
                "Break work into task categories",
                "Group recurring workflows into categories.",
                vec![
                    Subtask::new("st-1", "Collect all recurring tasks"),
                    Subtask::new("st-2", "Cluster by theme"),
                    Subtask::new("st-3", "Name the categories"),
                ],
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let cats = seed_categories();
        let shape: Vec<Vec<usize>> = cats
            .iter()
            .map(|c| c.tasks.iter().map(|t| t.subtasks.len()).collect())
            .collect();
        assert_eq!(shape, vec![vec![3, 2], vec![3]]);
        assert!(cats.iter().flat_map(|c| &c.tasks).flat_map(|t| &t.subtasks).all(|st| !st.completed));
    }

    #[test]
    fn test_seed_ids_unique_within_parent() {
        let cats = seed_categories();
        let cat_ids: HashSet<_> = cats.iter().map(|c| &c.id).collect();
        assert_eq!(cat_ids.len(), cats.len());
        for cat in &cats {
            let task_ids: HashSet<_> = cat.tasks.iter().map(|t| &t.id).collect();
            assert_eq!(task_ids.len(), cat.tasks.len());
            for task in &cat.tasks {
                let st_ids: HashSet<_> = task.subtasks.iter().map(|s| &s.id).collect();
                assert_eq!(st_ids.len(), task.subtasks.len());
            }
        }
    }
}
