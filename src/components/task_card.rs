//! Task Card Component
//!
//! Task ring, title, Done badge and (when expanded) the subtask checklist.

use leptos::prelude::*;

use completion_tracker::{SubtaskPath, Task};

use crate::components::ProgressRing;
use crate::context::use_app_context;
use crate::store::{
    store_subtask_done, store_task_complete, store_task_open, store_task_percent, store_toggle_subtask, store_toggle_task,
    use_cockpit_store,
};

#[component]
pub fn TaskCard(category_id: String, task: Task) -> impl IntoView {
    let store = use_cockpit_store();
    let ctx = use_app_context();

    let percent = {
        let (cat, id) = (category_id.clone(), task.id.clone());
        Signal::derive(move || store_task_percent(&store, &cat, &id))
    };
    let is_complete = {
        let (cat, id) = (category_id.clone(), task.id.clone());
        Signal::derive(move || store_task_complete(&store, &cat, &id))
    };
    let is_open = {
        let (cat, id) = (category_id.clone(), task.id.clone());
        move || store_task_open(&store, &cat, &id)
    };
    let on_toggle_open = {
        let (cat, id) = (category_id.clone(), task.id.clone());
        move |_| ctx.with_notifier(|n| store_toggle_task(&store, n, &cat, &id))
    };
    let chevron_open = is_open.clone();
    let subtask_count = format!("{} subtasks", task.subtasks.len());

    let subtasks = task
        .subtasks
        .iter()
        .enumerate()
        .map(|(index, subtask)| {
            let path = SubtaskPath::new(category_id.clone(), task.id.clone(), subtask.id.clone());
            let done = {
                let path = path.clone();
                move || store_subtask_done(&store, &path)
            };
            let row_done = done.clone();
            let label_done = done.clone();
            let on_change = move |_| ctx.with_notifier(|n| store_toggle_subtask(&store, n, &path));

            view! {
                <label class=move || {
                    let mut c = String::from("subtask-row");
                    if row_done() { c.push_str(" done"); }
                    if index > 0 { c.push_str(" stepped"); }
                    c
                }>
                    <input type="checkbox" prop:checked=done on:change=on_change />
                    <span class=move || if label_done() { "subtask-label done" } else { "subtask-label" }>
                        {subtask.label.clone()}
                    </span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class=move || if is_complete.get() { "task-card complete" } else { "task-card" }>
            <div class="task-card-body">
                <ProgressRing percent=percent caption=Signal::derive(move || format!("{}%", percent.get())) />

                <div class="task-content">
                    <div class="task-title-row">
                        <h4>{task.title.clone()}</h4>
                        <Show when=move || is_complete.get()>
                            <span class="done-badge">"Done"</span>
                        </Show>
                    </div>
                    <p class="hint">{task.description.clone()}</p>

                    <button class="subtask-toggle" on:click=on_toggle_open>
                        {subtask_count}
                        <span class=move || if chevron_open() { "chevron open" } else { "chevron" }>"⌄"</span>
                    </button>

                    <div class=move || if is_open() { "subtask-list open" } else { "subtask-list" }>
                        {subtasks}
                    </div>
                </div>
            </div>
        </div>
    }
}
