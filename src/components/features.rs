//! Features Component
//!
//! Four-card feature grid.

use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🗄",
        title: "Smart Data Ingestion",
        description: "Automatically connects to Confluence, GitHub, JIRA, and Notion. Your docs become searchable knowledge instantly.",
        gradient: "grad-primary-secondary",
    },
    Feature {
        icon: "💬",
        title: "RAG-Powered Chat",
        description: "Ask questions like 'How does our CI/CD work?' and get accurate answers with source citations from your actual docs.",
        gradient: "grad-secondary-accent",
    },
    Feature {
        icon: "🗺",
        title: "Personalized Learning Paths",
        description: "AI analyzes JIRA history to build 30-day onboarding maps tailored to each engineer's role and learning pace.",
        gradient: "grad-accent-primary",
    },
    Feature {
        icon: "🛡",
        title: "Enterprise Security",
        description: "Your data never leaves your infrastructure. SOC 2 compliant with end-to-end encryption and SSO support.",
        gradient: "grad-primary-wide",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features-section">
            <div class="section-header">
                <h2>"Everything You Need to Onboard Smarter"</h2>
                <p>"Built by engineers, for engineers. OnboardIQ turns tribal knowledge into structured learning."</p>
            </div>

            <div class="features-grid">
                {FEATURES.iter().map(|f| view! {
                    <div class="card feature-card">
                        <div class=format!("feature-icon {}", f.gradient)>{f.icon}</div>
                        <h3>{f.title}</h3>
                        <p>{f.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
