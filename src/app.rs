//! OnboardIQ Frontend App
//!
//! Root component: provides the cockpit store and app context, then shows
//! either the landing page or the task cockpit.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{config_from_location, AppContext, Page};
use crate::feedback::WebFeedback;
use crate::pages::{CockpitPage, LandingPage};
use crate::store::CockpitState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Landing);

    // One tracker per session, seeded fresh on every page load
    let state = CockpitState::new(config_from_location());
    log::debug!("[APP] seed tree: {}", state.tracker.snapshot_json());
    provide_context(Store::new(state));
    provide_context(AppContext::new((page, set_page), Arc::new(WebFeedback)));

    view! {
        {move || match page.get() {
            Page::Landing => view! { <LandingPage /> }.into_any(),
            Page::Cockpit => view! { <CockpitPage /> }.into_any(),
        }}
    }
}
