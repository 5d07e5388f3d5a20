//! Call To Action Component

use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="pricing" class="cta-section">
            <div class="card cta-card">
                <div class="cta-blob top-right"></div>
                <div class="cta-blob bottom-left"></div>

                <div class="cta-content">
                    <div class="cta-badge">"⚡ Limited Beta Access"</div>
                    <h2>"Ready to Transform Your Onboarding?"</h2>
                    <p>
                        "Join forward-thinking engineering teams reducing ramp-up time by 30%. "
                        "Get early access to OnboardIQ beta."
                    </p>
                    <div class="cta-actions">
                        <button class="btn btn-white btn-lg">"Request Demo →"</button>
                        <button class="btn btn-ghost-white btn-lg">"Talk to Sales"</button>
                    </div>
                    <p class="cta-footnote">
                        "🔒 Enterprise-grade security • No credit card required • Setup in under 10 minutes"
                    </p>
                </div>
            </div>
        </section>
    }
}
