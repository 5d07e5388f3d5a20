//! Task Cockpit Page
//!
//! Role cockpit: overall progress, three accordion sections, the checklist
//! tree and the completion toast.

use leptos::prelude::*;

use crate::components::{AccordionSection, CategoryCard, CompletionToast, ProgressPanel};
use crate::context::{use_app_context, Page};
use crate::store::{store_category_ids, use_cockpit_store, SECTION_RESPONSIBILITIES, SECTION_SUMMARY, SECTION_TASKS};

const RESPONSIBILITIES: &[&str] = &[
    "Drive outcomes for the team and protect focus time",
    "Keep work visible through structured task categories",
    "Communicate progress clearly to stakeholders",
];

const ROLE_SUMMARY: &str = "This workspace connects high-level responsibilities to granular subtasks \
    with live progress tracking and micro-interactions. Each completed subtask updates the overall \
    metrics in real-time, providing clear visibility into team productivity and helping identify \
    potential bottlenecks before they impact delivery.";

#[component]
pub fn CockpitPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cockpit_store();

    // Structure never changes after seeding
    let category_ids = store_category_ids(&store);

    view! {
        <div class="cockpit-page">
            <div class="cockpit-back">
                <button class="btn btn-ghost btn-sm" on:click=move |_| ctx.navigate(Page::Landing)>
                    "← Back to Home"
                </button>
            </div>

            <div class="cockpit-shell">
                <div class="cockpit-header">
                    <div>
                        <div class="eyebrow">"Role cockpit"</div>
                        <h1>"Responsibilities & Tasks"</h1>
                    </div>
                    <div class="cockpit-badge">"⚙️"</div>
                </div>

                <ProgressPanel />

                <div class="accordion-stack">
                    <AccordionSection
                        title="Key responsibilities"
                        description="Tap to expand and refine what this role owns"
                        section_key=SECTION_RESPONSIBILITIES
                    >
                        <ul class="bullet-list">
                            {RESPONSIBILITIES.iter().map(|r| view! {
                                <li><span class="bullet">"•"</span><span>{*r}</span></li>
                            }).collect_view()}
                        </ul>
                    </AccordionSection>

                    <AccordionSection
                        title="Role summary"
                        description="A quick snapshot of impact and expectations"
                        section_key=SECTION_SUMMARY
                    >
                        <p class="role-summary">{ROLE_SUMMARY}</p>
                    </AccordionSection>

                    <AccordionSection
                        title="Task categories & subtasks"
                        description="Expand categories, check subtasks, and watch progress update"
                        section_key=SECTION_TASKS
                    >
                        <div class="category-list">
                            {category_ids.into_iter().map(|id| view! {
                                <CategoryCard category_id=id />
                            }).collect_view()}
                        </div>
                    </AccordionSection>
                </div>
            </div>

            <CompletionToast />
        </div>
    }
}
