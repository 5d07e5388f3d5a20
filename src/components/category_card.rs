//! Category Card Component
//!
//! Collapsible category header with its task cards.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::{store_category, store_category_open, store_category_percent, store_toggle_category, use_cockpit_store};

#[component]
pub fn CategoryCard(category_id: String) -> impl IntoView {
    let store = use_cockpit_store();
    let ctx = use_app_context();

    // Tree shape is fixed for the session, so one snapshot drives the layout
    let Some(category) = store_category(&store, &category_id) else {
        log::warn!("[COCKPIT] category {} vanished", category_id);
        return ().into_any();
    };

    let is_open = {
        let id = category_id.clone();
        move || store_category_open(&store, &id)
    };
    let percent = {
        let id = category_id.clone();
        move || store_category_percent(&store, &id)
    };
    let on_toggle = {
        let id = category_id.clone();
        move |_| ctx.with_notifier(|n| store_toggle_category(&store, n, &id))
    };
    let chevron_open = is_open.clone();
    let tasks = category.tasks.clone();

    view! {
        <div class="category-card">
            <button class="category-header" on:click=on_toggle>
                <div class="category-heading">
                    <div class="category-name">{category.name.clone()}</div>
                    <div class="hint">
                        {category.task_count_label()} " · " {move || format!("{}%", percent())}
                    </div>
                </div>
                <span class=move || if chevron_open() { "chevron open" } else { "chevron" }>"⌄"</span>
            </button>

            {move || is_open().then(|| {
                let category_id = category_id.clone();
                view! {
                    <div class="category-tasks">
                        {tasks.iter().map(|task| view! {
                            <TaskCard category_id=category_id.clone() task=task.clone() />
                        }).collect_view()}
                    </div>
                }
            })}
        </div>
    }
    .into_any()
}
