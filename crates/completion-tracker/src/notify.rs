//! Ambient Feedback Port
//!
//! The tracker fires into a [`Notifier`] and never reads anything back.
//! Adapters decide whether that means a tone, a spoken phrase, or nothing.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::error::FeedbackError;

/// Which expand/collapse control was used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCue {
    Section,
    Category,
    Task,
}

/// Payload-free discriminant of a [`Notification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    TaskCompleted,
    NeutralToggle,
    Navigation,
}

/// One cue for the feedback sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A task just went from incomplete to complete
    TaskCompleted { title: String },
    /// Any other resolved subtask toggle
    NeutralToggle,
    /// Expand/collapse click
    Navigation(NavCue),
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::TaskCompleted { .. } => NotificationKind::TaskCompleted,
            Notification::NeutralToggle => NotificationKind::NeutralToggle,
            Notification::Navigation(_) => NotificationKind::Navigation,
        }
    }

    /// Task title for completions, nothing otherwise
    pub fn payload(&self) -> Option<&str> {
        match self {
            Notification::TaskCompleted { title } => Some(title),
            _ => None,
        }
    }
}

/// Best-effort feedback sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), FeedbackError>;
}

/// Fire a notification and swallow any failure
pub(crate) fn fire(notifier: &dyn Notifier, notification: Notification) {
    if let Err(e) = notifier.notify(&notification) {
        log::warn!("[FEEDBACK] {:?} dropped: {}", notification.kind(), e);
    }
}

/// Sink for headless contexts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Keeps every notification in arrival order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.received().iter().filter(|n| n.kind() == kind).count()
    }

    pub fn clear(&self) {
        if let Ok(mut r) = self.received.lock() {
            r.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), FeedbackError> {
        self.received
            .lock()
            .map_err(|e| FeedbackError::Playback(e.to_string()))?
            .push(notification.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Notifier for Broken {
        fn notify(&self, _notification: &Notification) -> Result<(), FeedbackError> {
            Err(FeedbackError::Unavailable("no audio device".to_string()))
        }
    }

    #[test]
    fn test_kind_and_payload() {
        let done = Notification::TaskCompleted { title: "Write role summary".to_string() };
        assert_eq!(done.kind(), NotificationKind::TaskCompleted);
        assert_eq!(done.payload(), Some("Write role summary"));
        assert_eq!(Notification::NeutralToggle.payload(), None);
        assert_eq!(Notification::Navigation(NavCue::Task).kind(), NotificationKind::Navigation);
    }

    #[test]
    fn test_fire_swallows_errors() {
        fire(&Broken, Notification::NeutralToggle);
    }

    #[test]
    fn test_recording_keeps_order() {
        let rec = RecordingNotifier::new();
        fire(&rec, Notification::Navigation(NavCue::Section));
        fire(&rec, Notification::NeutralToggle);
        assert_eq!(
            rec.received(),
            vec![Notification::Navigation(NavCue::Section), Notification::NeutralToggle]
        );
        rec.clear();
        assert!(rec.received().is_empty());
    }
}
