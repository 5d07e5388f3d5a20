//! Progress Ring Component
//!
//! Circular SVG indicator with a centered caption.

use leptos::prelude::*;

/// Ring whose arc length is `percent` of the circumference (r=16 ≈ 100 units)
#[component]
pub fn ProgressRing(
    #[prop(into)] percent: Signal<u8>,
    #[prop(into)] caption: Signal<String>,
    /// Red → amber → green stroke instead of the primary color
    #[prop(optional)] gradient: bool,
) -> impl IntoView {
    let stroke = if gradient { "url(#progressGradient)" } else { "var(--primary)" };

    view! {
        <div class="progress-ring">
            <svg class="progress-ring-svg" viewBox="0 0 36 36">
                <circle cx="18" cy="18" r="16" fill="none" stroke-width="2" class="progress-ring-track" />
                <circle
                    cx="18"
                    cy="18"
                    r="16"
                    fill="none"
                    stroke=stroke
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-dasharray=move || format!("{} 100", percent.get())
                    class="progress-ring-arc"
                />
                {gradient.then(|| view! {
                    <defs>
                        <linearGradient id="progressGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="hsl(0, 70%, 50%)" />
                            <stop offset="50%" stop-color="hsl(45, 90%, 55%)" />
                            <stop offset="100%" stop-color="hsl(120, 60%, 50%)" />
                        </linearGradient>
                    </defs>
                })}
            </svg>
            <div class="progress-ring-caption">{move || caption.get()}</div>
        </div>
    }
}
