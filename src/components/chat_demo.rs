//! Chat Demo Component
//!
//! Canned question/answer transcript. The input box is decorative: nothing
//! is sent anywhere.

use leptos::prelude::*;

use crate::markdown::{parse_markdown, parse_markdown_inline};

#[derive(Clone, Copy, PartialEq)]
enum Role {
    User,
    Assistant,
}

struct Message {
    role: Role,
    content: &'static str,
    sources: &'static [&'static str],
}

const TRANSCRIPT: &[Message] = &[
    Message {
        role: Role::User,
        content: "How does our deployment pipeline work?",
        sources: &[],
    },
    Message {
        role: Role::Assistant,
        content: "Based on your team's documentation, here's how your deployment pipeline works:\n\n\
                  1. **Code Review**: PRs require 2 approvals\n\
                  2. **CI Checks**: Jest tests + ESLint on every commit\n\
                  3. **Staging Deploy**: Automatic merge to staging branch\n\
                  4. **Production**: Manual approval via JIRA ticket",
        sources: &["deployment-guide.md", "JIRA-1247"],
    },
];

#[component]
pub fn ChatDemo() -> impl IntoView {
    let (input, set_input) = signal(String::new());

    view! {
        <section id="demo" class="chat-demo-section">
            <div class="section-header">
                <h2>"Ask Anything About Your Codebase"</h2>
                <p>"See how OnboardIQ answers company-specific questions using your actual documentation"</p>
            </div>

            <div class="card chat-card">
                <div class="chat-messages">
                    {TRANSCRIPT.iter().map(|m| {
                        let (row, bubble, html) = match m.role {
                            Role::User => ("chat-row user", "chat-bubble user", parse_markdown_inline(m.content)),
                            Role::Assistant => ("chat-row assistant", "chat-bubble assistant", parse_markdown(m.content)),
                        };
                        view! {
                            <div class=row>
                                <div class=bubble>
                                    <div class="chat-text" inner_html=html></div>
                                    {(!m.sources.is_empty()).then(|| view! {
                                        <div class="chat-sources">
                                            {m.sources.iter().map(|s| view! {
                                                <span class="source-chip">"📄 " {*s}</span>
                                            }).collect_view()}
                                        </div>
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="chat-input-row">
                    <input
                        type="text"
                        placeholder="Ask about your team's processes, tools, or codebase..."
                        prop:value=input
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary btn-icon" title="Send">"➤"</button>
                </div>
            </div>
        </section>
    }
}
