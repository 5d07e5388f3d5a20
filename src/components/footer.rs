//! Footer Component

use leptos::prelude::*;

const FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    ("Product", &[
        ("#features", "Features"),
        ("#pricing", "Pricing"),
        ("#demo", "Demo"),
        ("#integrations", "Integrations"),
    ]),
    ("Company", &[
        ("#about", "About"),
        ("#blog", "Blog"),
        ("#careers", "Careers"),
        ("#contact", "Contact"),
    ]),
    ("Legal", &[
        ("#privacy", "Privacy"),
        ("#terms", "Terms"),
        ("#security", "Security"),
    ]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>"OnboardIQ"</h3>
                    <p>"AI-powered onboarding that gets engineers productive 30% faster."</p>
                </div>

                {FOOTER_COLUMNS.iter().map(|(heading, links)| view! {
                    <div class="footer-column">
                        <h4>{*heading}</h4>
                        <ul>
                            {links.iter().map(|(href, label)| view! {
                                <li><a href=*href>{*label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>

            <div class="footer-bottom">
                <p>"© 2025 OnboardIQ. All rights reserved."</p>
            </div>
        </footer>
    }
}
