//! Tracker Scenario Tests
//!
//! End-to-end behavior over the seed tree and small hand-built trees.

#[cfg(test)]
mod tests {
    use crate::{
        completion_percent, CockpitConfig, Category, FeedbackError, Notification, NotificationKind, Notifier,
        RecordingNotifier, RollupGranularity, Subtask, SubtaskPath, Task, Tracker,
    };

    struct DeadSpeaker;

    impl Notifier for DeadSpeaker {
        fn notify(&self, _notification: &Notification) -> Result<(), FeedbackError> {
            Err(FeedbackError::Unavailable("audio blocked".to_string()))
        }
    }

    fn two_step_tracker() -> Tracker {
        let task = Task::new(
            "task-1",
            "Pair task",
            "",
            vec![Subtask::new("A", "first"), Subtask::new("B", "second")],
        );
        Tracker::new(vec![Category::new("cat-1", "Only", vec![task])], CockpitConfig::default())
    }

    fn all_flags(tracker: &Tracker) -> Vec<bool> {
        tracker
            .categories()
            .iter()
            .flat_map(|c| &c.tasks)
            .flat_map(|t| &t.subtasks)
            .map(|st| st.completed)
            .collect()
    }

    #[test]
    fn test_double_toggle_restores_state_and_metrics() {
        for rollup in [RollupGranularity::Task, RollupGranularity::Subtask] {
            let mut tracker = Tracker::seeded(CockpitConfig::new(rollup, Default::default()));
            let rec = RecordingNotifier::new();
            tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-2", "st-1"), &rec);

            let flags = all_flags(&tracker);
            let overall = tracker.overall_percent();
            let cat = tracker.category_percent("cat-1");
            let task = tracker.task_percent("cat-1", "task-2");

            let p = SubtaskPath::new("cat-1", "task-2", "st-2");
            tracker.toggle_subtask(&p, &rec);
            tracker.toggle_subtask(&p, &rec);

            assert_eq!(all_flags(&tracker), flags);
            assert_eq!(tracker.overall_percent(), overall);
            assert_eq!(tracker.category_percent("cat-1"), cat);
            assert_eq!(tracker.task_percent("cat-1", "task-2"), task);
        }
    }

    #[test]
    fn test_empty_trees_yield_zero() {
        let empty = Tracker::new(vec![], CockpitConfig::default());
        assert_eq!(empty.overall_percent(), 0);

        let hollow = Tracker::new(vec![Category::new("cat-1", "Nothing yet", vec![])], CockpitConfig::default());
        assert_eq!(hollow.category_percent("cat-1"), 0);
        assert_eq!(hollow.overall_percent(), 0);
        assert_eq!(completion_percent(&hollow.categories()[0].tasks, RollupGranularity::Subtask), 0);
    }

    #[test]
    fn test_completion_fires_only_on_rising_edge() {
        let mut tracker = two_step_tracker();
        let rec = RecordingNotifier::new();

        tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-1", "A"), &rec);
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 0);

        tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-1", "B"), &rec);
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 1);

        rec.clear();
        tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-1", "A"), &rec);
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 0);
        assert_eq!(rec.received(), vec![Notification::NeutralToggle]);
    }

    #[test]
    fn test_toggle_touches_only_addressed_subtask() {
        let mut tracker = Tracker::default();
        let before = tracker.clone();
        let target = SubtaskPath::new("cat-1", "task-1", "st-2");
        tracker.toggle_subtask(&target, &RecordingNotifier::new());

        for (cat_before, cat_after) in before.categories().iter().zip(tracker.categories()) {
            for (task_before, task_after) in cat_before.tasks.iter().zip(&cat_after.tasks) {
                for (st_before, st_after) in task_before.subtasks.iter().zip(&task_after.subtasks) {
                    let addressed = cat_after.id == target.category_id
                        && task_after.id == target.task_id
                        && st_after.id == target.subtask_id;
                    assert_eq!(st_before.completed != st_after.completed, addressed);
                    assert_eq!(st_before.label, st_after.label);
                }
            }
        }
    }

    #[test]
    fn test_seed_scenario_first_task_done() {
        let mut tracker = Tracker::default();
        let rec = RecordingNotifier::new();
        assert_eq!(tracker.overall_percent(), 0);
        assert_eq!(tracker.progress_level().label(), "Low");

        for st in ["st-1", "st-2", "st-3"] {
            tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-1", st), &rec);
        }

        assert_eq!(tracker.overall_percent(), 33);
        assert_eq!(tracker.progress_level().label(), "Medium");
        let completions: Vec<_> = rec
            .received()
            .into_iter()
            .filter(|n| n.kind() == NotificationKind::TaskCompleted)
            .collect();
        assert_eq!(
            completions,
            vec![Notification::TaskCompleted {
                title: "Define key responsibilities".to_string()
            }]
        );
    }

    #[test]
    fn test_seed_scenario_everything_done() {
        let mut tracker = Tracker::default();
        let rec = RecordingNotifier::new();
        let paths: Vec<SubtaskPath> = tracker
            .categories()
            .iter()
            .flat_map(|c| {
                c.tasks.iter().flat_map(move |t| {
                    t.subtasks
                        .iter()
                        .map(move |st| SubtaskPath::new(c.id.clone(), t.id.clone(), st.id.clone()))
                })
            })
            .collect();

        for p in &paths {
            tracker.toggle_subtask(p, &rec);
        }

        assert_eq!(tracker.overall_percent(), 100);
        assert_eq!(tracker.progress_level().label(), "High");
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 3);
        assert_eq!(tracker.revision(), paths.len() as u64);
        assert_eq!(tracker.kpis().open_subtasks(), 0);
    }

    #[test]
    fn test_four_subtask_task_percent() {
        let task = Task::new(
            "task-9",
            "Quarter",
            "",
            vec![
                Subtask::new("st-1", "a"),
                Subtask::new("st-2", "b"),
                Subtask::new("st-3", "c"),
                Subtask::new("st-4", "d"),
            ],
        );
        let mut tracker = Tracker::new(vec![Category::new("cat-1", "C", vec![task])], CockpitConfig::default());
        tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-9", "st-3"), &RecordingNotifier::new());
        assert_eq!(tracker.task_percent("cat-1", "task-9"), 25);
    }

    #[test]
    fn test_rounded_hundred_is_not_complete() {
        let subtasks: Vec<Subtask> = (0..200).map(|i| Subtask::new(format!("st-{}", i), "step")).collect();
        let task = Task::new("task-big", "Long haul", "", subtasks);
        let mut tracker = Tracker::new(vec![Category::new("cat-1", "C", vec![task])], CockpitConfig::default());
        let rec = RecordingNotifier::new();

        for i in 0..199 {
            tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-big", format!("st-{}", i)), &rec);
        }
        assert_eq!(tracker.task_percent("cat-1", "task-big"), 100);
        assert!(!tracker.task_complete("cat-1", "task-big"));
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 0);

        tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-big", "st-199"), &rec);
        assert!(tracker.task_complete("cat-1", "task-big"));
        assert_eq!(rec.count(NotificationKind::TaskCompleted), 1);
    }

    #[test]
    fn test_failing_notifier_does_not_block_toggles() {
        let mut tracker = Tracker::default();
        let path = SubtaskPath::new("cat-1", "task-1", "st-1");

        let outcome = tracker.toggle_subtask(&path, &DeadSpeaker);
        assert!(outcome.is_some_and(|o| o.completed));
        assert!(tracker.subtask(&path).is_some_and(|st| st.completed));
        assert_eq!(tracker.revision(), 1);

        for st in ["st-2", "st-3"] {
            tracker.toggle_subtask(&SubtaskPath::new("cat-1", "task-1", st), &DeadSpeaker);
        }
        assert_eq!(tracker.revision(), 3);
        assert!(tracker.task_complete("cat-1", "task-1"));
        assert_eq!(tracker.overall_percent(), 33);

        tracker.toggle_subtask(&path, &DeadSpeaker);
        assert!(tracker.subtask(&path).is_some_and(|st| !st.completed));
        assert_eq!(tracker.revision(), 4);
    }
}
