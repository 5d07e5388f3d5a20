//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use completion_tracker::{CockpitConfig, Notifier};

/// Which page is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Cockpit,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Feedback sink shared by every cockpit control
    notifier: StoredValue<Arc<dyn Notifier>>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), notifier: Arc<dyn Notifier>) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            notifier: StoredValue::new(notifier),
        }
    }

    /// Switch pages
    pub fn navigate(&self, page: Page) {
        log::debug!("[APP] navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Run `f` with the feedback sink
    pub fn with_notifier<R>(&self, f: impl FnOnce(&dyn Notifier) -> R) -> R {
        self.notifier.with_value(|n| f(n.as_ref()))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Read the cockpit policy from the page's query string, defaults on any error
pub fn config_from_location() -> CockpitConfig {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match CockpitConfig::from_query(&query) {
        Ok(config) => {
            log::info!(
                "[APP] cockpit config: rollup={} direction={} thresholds={}/{}",
                config.rollup,
                config.direction,
                config.thresholds.medium_from,
                config.thresholds.high_from
            );
            config
        }
        Err(e) => {
            log::warn!("[APP] ignoring query {:?}: {}", query, e);
            CockpitConfig::default()
        }
    }
}
