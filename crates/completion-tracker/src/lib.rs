//! Completion Tracker
//!
//! Category → task → subtask checklist with derived completion metrics.
//! This crate has NO web dependencies: the render surface and the feedback
//! sink plug in through [`Notifier`] and plain data accessors.

mod config;
mod error;
mod expand;
mod level;
mod model;
mod notify;
mod rollup;
mod seed;
mod tracker;

#[cfg(test)]
mod tests;

pub use config::{CockpitConfig, Directionality, LevelThresholds, RollupGranularity};
pub use error::{ConfigError, FeedbackError, TrackerError, TrackerResult};
pub use expand::ExpandState;
pub use level::{LevelBucket, ProgressLevel, Tone};
pub use model::{Category, Subtask, SubtaskPath, Task};
pub use notify::{NavCue, NoopNotifier, Notification, NotificationKind, Notifier, RecordingNotifier};
pub use rollup::{completion_percent, percent_of, task_percent, Kpis};
pub use seed::seed_categories;
pub use tracker::{TaskTransition, ToggleOutcome, Tracker};
