//! Accordion Section Component
//!
//! Collapsible cockpit section. Open state lives in the store's section map.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_section_open, store_toggle_section, use_cockpit_store};

#[component]
pub fn AccordionSection(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Key in the section expand map
    section_key: &'static str,
    children: Children,
) -> impl IntoView {
    let store = use_cockpit_store();
    let ctx = use_app_context();

    let is_open = move || store_section_open(&store, section_key);
    let on_toggle = move |_| ctx.with_notifier(|n| store_toggle_section(&store, n, section_key));

    view! {
        <div class="accordion-section">
            <button class="accordion-header" on:click=on_toggle>
                <div class="accordion-heading">
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
                <div class="chevron-wrap">
                    <span class=move || if is_open() { "chevron open" } else { "chevron" }>"⌄"</span>
                </div>
            </button>

            <div class=move || if is_open() { "accordion-body open" } else { "accordion-body" }>
                <div class="accordion-content">{children()}</div>
            </div>
        </div>
    }
}
