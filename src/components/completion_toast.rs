//! Completion Toast Component

use leptos::prelude::*;

use crate::store::{store_toast, use_cockpit_store};

/// Bottom toast shown while the store holds a toast
#[component]
pub fn CompletionToast() -> impl IntoView {
    let store = use_cockpit_store();

    move || {
        store_toast(&store).map(|toast| view! {
            <div class="completion-toast">
                <div class="toast-icon">"✔"</div>
                <div>
                    <div class="toast-title">"Task complete"</div>
                    <div class="toast-body">
                        {format!("\"{}\" is 100% done. Nice escalation!", toast.task_title)}
                    </div>
                </div>
            </div>
        })
    }
}
