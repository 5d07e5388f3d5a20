//! Cockpit State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The domain tree
//! and the three expand maps are separate fields so a checkbox never
//! re-renders the accordions and vice versa.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use completion_tracker::{
    Category, CockpitConfig, ExpandState, Kpis, NavCue, Notifier, ProgressLevel, SubtaskPath, TaskTransition, Tracker,
};

/// Accordion keys on the cockpit page
pub const SECTION_RESPONSIBILITIES: &str = "responsibilities";
pub const SECTION_SUMMARY: &str = "summary";
pub const SECTION_TASKS: &str = "tasks";

/// How long the completion toast stays up
const TOAST_MS: u32 = 3200;

/// Completion toast, `id` guards against an older timeout hiding a newer toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub task_title: String,
}

/// Cockpit state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct CockpitState {
    /// Checklist tree and rollup policy
    pub tracker: Tracker,
    /// Open accordion sections
    pub open_sections: ExpandState,
    /// Open category cards
    pub open_categories: ExpandState,
    /// Task cards showing their subtask list
    pub open_tasks: ExpandState,
    /// Visible completion toast
    pub toast: Option<Toast>,
    /// Last toast id handed out
    pub toast_seq: u64,
}

impl CockpitState {
    pub fn new(config: CockpitConfig) -> Self {
        Self {
            tracker: Tracker::seeded(config),
            open_sections: ExpandState::with_open([SECTION_TASKS]),
            open_categories: ExpandState::new(),
            open_tasks: ExpandState::new(),
            toast: None,
            toast_seq: 0,
        }
    }
}

/// Type alias for the store
pub type CockpitStore = Store<CockpitState>;

/// Get the cockpit store from context
pub fn use_cockpit_store() -> CockpitStore {
    expect_context::<CockpitStore>()
}

// ========================
// Reads
// ========================

pub fn store_overall_percent(store: &CockpitStore) -> u8 {
    store.tracker().read().overall_percent()
}

pub fn store_progress_level(store: &CockpitStore) -> ProgressLevel {
    store.tracker().read().progress_level()
}

pub fn store_kpis(store: &CockpitStore) -> Kpis {
    store.tracker().read().kpis()
}

pub fn store_config(store: &CockpitStore) -> CockpitConfig {
    store.tracker().read().config()
}

pub fn store_category_ids(store: &CockpitStore) -> Vec<String> {
    store.tracker().read().categories().iter().map(|c| c.id.clone()).collect()
}

pub fn store_category(store: &CockpitStore, category_id: &str) -> Option<Category> {
    store.tracker().read().category(category_id).cloned()
}

pub fn store_subtask_done(store: &CockpitStore, path: &SubtaskPath) -> bool {
    store.tracker().read().subtask(path).map(|st| st.completed).unwrap_or(false)
}

pub fn store_category_percent(store: &CockpitStore, category_id: &str) -> u8 {
    store.tracker().read().category_percent(category_id)
}

pub fn store_task_percent(store: &CockpitStore, category_id: &str, task_id: &str) -> u8 {
    store.tracker().read().task_percent(category_id, task_id)
}

pub fn store_task_complete(store: &CockpitStore, category_id: &str, task_id: &str) -> bool {
    store.tracker().read().task_complete(category_id, task_id)
}

pub fn store_section_open(store: &CockpitStore, key: &str) -> bool {
    store.open_sections().read().is_open(key)
}

pub fn store_category_open(store: &CockpitStore, category_id: &str) -> bool {
    store.open_categories().read().is_open(category_id)
}

pub fn store_task_open(store: &CockpitStore, category_id: &str, task_id: &str) -> bool {
    store.open_tasks().read().is_open(&task_key(category_id, task_id))
}

pub fn store_toast(store: &CockpitStore) -> Option<Toast> {
    store.toast().get()
}

// ========================
// Mutations
// ========================

/// Toggle a subtask; pops the toast on a task's rising edge
pub fn store_toggle_subtask(store: &CockpitStore, notifier: &dyn Notifier, path: &SubtaskPath) {
    let outcome = store.tracker().write().toggle_subtask(path, notifier);
    if let Some(outcome) = outcome {
        if outcome.transition == TaskTransition::Completed {
            show_toast(store, outcome.task_title);
        }
    }
}

pub fn store_toggle_section(store: &CockpitStore, notifier: &dyn Notifier, key: &str) {
    store.open_sections().write().toggle_with_cue(key, NavCue::Section, notifier);
}

pub fn store_toggle_category(store: &CockpitStore, notifier: &dyn Notifier, category_id: &str) {
    store.open_categories().write().toggle_with_cue(category_id, NavCue::Category, notifier);
}

pub fn store_toggle_task(store: &CockpitStore, notifier: &dyn Notifier, category_id: &str, task_id: &str) {
    store
        .open_tasks()
        .write()
        .toggle_with_cue(&task_key(category_id, task_id), NavCue::Task, notifier);
}

fn show_toast(store: &CockpitStore, task_title: String) {
    let id = {
        let field = store.toast_seq();
        let mut seq = field.write();
        *seq += 1;
        *seq
    };
    store.toast().set(Some(Toast { id, task_title }));

    let store = *store;
    Timeout::new(TOAST_MS, move || {
        let current = store.toast().get_untracked().map(|t| t.id);
        if current == Some(id) {
            store.toast().set(None);
        }
    })
    .forget();
}

/// Task ids are only unique per category
fn task_key(category_id: &str, task_id: &str) -> String {
    format!("{}/{}", category_id, task_id)
}
