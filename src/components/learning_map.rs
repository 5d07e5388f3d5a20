//! Learning Map Component
//!
//! 30-day onboarding roadmap mockup. Phase status is derived from module
//! completion rather than stored.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Completed,
    Current,
    Upcoming,
}

impl PhaseStatus {
    fn label(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Completed",
            PhaseStatus::Current => "In Progress",
            PhaseStatus::Upcoming => "Upcoming",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "phase-card completed",
            PhaseStatus::Current => "phase-card current",
            PhaseStatus::Upcoming => "phase-card upcoming",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "✔",
            PhaseStatus::Current => "⏱",
            PhaseStatus::Upcoming => "○",
        }
    }
}

pub struct Phase {
    pub name: &'static str,
    /// (module title, completed)
    pub modules: &'static [(&'static str, bool)],
}

const PHASES: &[Phase] = &[
    Phase {
        name: "Week 1: Foundation",
        modules: &[
            ("Setup Dev Environment", true),
            ("Architecture Overview", true),
            ("Code Review Process", true),
        ],
    },
    Phase {
        name: "Week 2: Core Systems",
        modules: &[
            ("API Design Patterns", true),
            ("Database Schema", false),
            ("Testing Framework", false),
        ],
    },
    Phase {
        name: "Week 3-4: Advanced Topics",
        modules: &[
            ("Microservices Architecture", false),
            ("CI/CD Deep Dive", false),
            ("First Solo Project", false),
        ],
    },
];

/// Fully done phases are Completed, the first unfinished one is Current,
/// everything after it is Upcoming
pub fn phase_statuses(phases: &[Phase]) -> Vec<PhaseStatus> {
    let mut seen_current = false;
    phases
        .iter()
        .map(|p| {
            if !p.modules.is_empty() && p.modules.iter().all(|(_, done)| *done) {
                PhaseStatus::Completed
            } else if !seen_current {
                seen_current = true;
                PhaseStatus::Current
            } else {
                PhaseStatus::Upcoming
            }
        })
        .collect()
}

#[component]
pub fn LearningMap() -> impl IntoView {
    let statuses = phase_statuses(PHASES);

    view! {
        <section class="learning-map-section">
            <div class="section-header">
                <h2>"Your Personalized Learning Journey"</h2>
                <p>"AI-generated 30-day roadmap based on your team's JIRA history and documentation"</p>
            </div>

            <div class="phase-list">
                {PHASES.iter().zip(statuses).map(|(phase, status)| view! {
                    <div class=format!("card {}", status.class())>
                        <div class="phase-header">
                            <div class="phase-title">
                                <span class="phase-icon">{status.icon()}</span>
                                <h3>{phase.name}</h3>
                            </div>
                            <span class="badge">{status.label()}</span>
                        </div>

                        <div class="phase-modules">
                            {phase.modules.iter().map(|(title, done)| view! {
                                <div class="phase-module">
                                    <span class="module-icon">{if *done { "✔" } else { "○" }}</span>
                                    <span class=if *done { "module-title done" } else { "module-title" }>{*title}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
