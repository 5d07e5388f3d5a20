//! Expand/Collapse State
//!
//! UI visibility keyed by id. Kept apart from the domain tree.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::notify::{fire, NavCue, Notification, Notifier};

/// key → open flag, missing keys are collapsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandState {
    open: HashMap<String, bool>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given keys open
    pub fn with_open<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: keys.into_iter().map(|k| (k.into(), true)).collect(),
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.get(key).copied().unwrap_or(false)
    }

    /// Flip `key`, returns the new value
    pub fn toggle(&mut self, key: &str) -> bool {
        let entry = self.open.entry(key.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Flip `key` and fire the navigation cue
    pub fn toggle_with_cue(&mut self, key: &str, cue: NavCue, notifier: &dyn Notifier) -> bool {
        let open = self.toggle(key);
        log::debug!("[EXPAND] {:?} {} -> {}", cue, key, if open { "open" } else { "closed" });
        fire(notifier, Notification::Navigation(cue));
        open
    }
}
