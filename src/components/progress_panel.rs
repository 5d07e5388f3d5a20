//! Progress Panel Component
//!
//! Overall rollup, level badge and (in subtask mode) KPI tiles.

use leptos::prelude::*;

use completion_tracker::RollupGranularity;

use crate::components::ProgressRing;
use crate::store::{store_config, store_kpis, store_overall_percent, store_progress_level, use_cockpit_store};

#[component]
pub fn ProgressPanel() -> impl IntoView {
    let store = use_cockpit_store();

    let overall = Signal::derive(move || store_overall_percent(&store));
    let level = move || store_progress_level(&store);
    let show_kpis = move || store_config(&store).rollup == RollupGranularity::Subtask;
    let rollup_hint = move || match store_config(&store).rollup {
        RollupGranularity::Task => "Live roll-up of all tasks in this workspace",
        RollupGranularity::Subtask => "Live roll-up of all subtasks in this workspace",
    };

    view! {
        <div class="progress-panel">
            <div class="progress-panel-top">
                <div>
                    <div class="eyebrow">"Overall Progress"</div>
                    <div class="hint">{rollup_hint}</div>
                </div>
                <div class="progress-total">
                    <div class="eyebrow">"Total completion"</div>
                    <div class="progress-total-value">{move || format!("{}%", overall.get())}</div>
                </div>
            </div>

            <div class="level-card">
                <ProgressRing
                    percent=overall
                    caption=Signal::derive(move || level().label().to_string())
                    gradient=true
                />
                <div class="level-text">
                    <div class="hint">{move || level().caption()}</div>
                    <div class=move || format!("level-label {}", level().tone().css_class())>
                        {move || level().label()}
                    </div>
                    <div class="level-bar">
                        <div class="level-bar-fill" style=move || format!("width: {}%;", overall.get())></div>
                    </div>
                </div>
            </div>

            <Show when=show_kpis>
                <KpiTiles />
            </Show>
        </div>
    }
}

/// Task and subtask counters
#[component]
fn KpiTiles() -> impl IntoView {
    let store = use_cockpit_store();
    let kpis = move || store_kpis(&store);

    view! {
        <div class="kpi-tiles">
            <div class="kpi-tile">
                <div class="kpi-value">{move || format!("{}/{}", kpis().completed_tasks, kpis().total_tasks)}</div>
                <div class="kpi-label">"Tasks done"</div>
            </div>
            <div class="kpi-tile">
                <div class="kpi-value">{move || format!("{}/{}", kpis().completed_subtasks, kpis().total_subtasks)}</div>
                <div class="kpi-label">"Subtasks done"</div>
            </div>
            <div class="kpi-tile">
                <div class="kpi-value">{move || kpis().open_subtasks()}</div>
                <div class="kpi-label">"Open subtasks"</div>
            </div>
        </div>
    }
}
