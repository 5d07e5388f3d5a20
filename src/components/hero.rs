//! Hero Component
//!
//! Landing page header, headline and primary calls to action.

use leptos::prelude::*;

/// Nav anchors in the hero header
const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#pricing", "Pricing"),
];

#[component]
pub fn Hero(#[prop(into)] on_open_cockpit: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-vignette"></div>
            <div class="hero-glow"></div>

            <header class="hero-header">
                <span class="hero-logo">"OnboardIQ"</span>
                <nav class="hero-nav">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href class="hero-nav-link">{*label}</a>
                    }).collect_view()}
                </nav>
            </header>

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-icon">"✨"</span>
                    <span>"AI-Powered Engineering Onboarding"</span>
                </div>

                <h1 class="hero-title">
                    <span class="gradient-text">"Onboard Engineers"</span>
                    <br />
                    <span>"30% Faster with AI"</span>
                </h1>

                <p class="hero-subtitle">
                    "Transform your internal docs and JIRA tickets into personalized learning paths. "
                    "Get new engineers productive in days, not months."
                </p>

                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg">"Get Early Access →"</button>
                    <button class="btn btn-outline btn-lg" on:click=move |_| on_open_cockpit.run(())>
                        "Try the task cockpit"
                    </button>
                </div>

                <div class="hero-social-proof">
                    <div class="avatar-stack">
                        {(0..4).map(|_| view! { <div class="avatar"></div> }).collect_view()}
                    </div>
                    <p>"Join 50+ engineering teams ramping up faster"</p>
                </div>
            </div>
        </section>
    }
}
