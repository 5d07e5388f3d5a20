//! Tracker Errors
//!
//! None of these ever reach the user. Lookup errors collapse into a silent
//! no-op, feedback errors are swallowed at the call site, config errors fall
//! back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for path resolution inside the tracker
pub type TrackerResult<T> = Result<T, TrackerError>;

/// A toggle addressed a path that does not exist in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum TrackerError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown task {task_id} in category {category_id}")]
    UnknownTask { category_id: String, task_id: String },
    #[error("unknown subtask {subtask_id} in task {category_id}/{task_id}")]
    UnknownSubtask {
        category_id: String,
        task_id: String,
        subtask_id: String,
    },
}

/// The ambient feedback sink could not produce a cue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The platform API is missing (headless, no window, no audio device)
    #[error("feedback unavailable: {0}")]
    Unavailable(String),
    /// The API exists but refused the request
    #[error("feedback playback failed: {0}")]
    Playback(String),
}

/// Invalid cockpit configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("thresholds must satisfy medium_from <= high_from <= 100 (got {medium_from}, {high_from})")]
    InvalidThresholds { medium_from: u8, high_from: u8 },
}
