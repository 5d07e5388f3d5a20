//! Landing Page
//!
//! Static marketing sections, top to bottom.

use leptos::prelude::*;

use crate::components::{ChatDemo, Cta, Features, Footer, Hero, LearningMap};
use crate::context::{use_app_context, Page};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="landing-page">
            <Hero on_open_cockpit=Callback::new(move |_| ctx.navigate(Page::Cockpit)) />
            <Features />
            <ChatDemo />
            <LearningMap />
            <Cta />
            <Footer />
        </div>
    }
}
