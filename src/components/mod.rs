//! UI Components
//!
//! Reusable Leptos components for the landing page and the task cockpit.

// Landing page sections
mod hero;
mod features;
mod chat_demo;
mod learning_map;
mod cta;
mod footer;

// Cockpit
mod progress_ring;
mod progress_panel;
mod accordion_section;
mod category_card;
mod task_card;
mod completion_toast;

pub use hero::Hero;
pub use features::Features;
pub use chat_demo::ChatDemo;
pub use learning_map::LearningMap;
pub use cta::Cta;
pub use footer::Footer;

pub use progress_ring::ProgressRing;
pub use progress_panel::ProgressPanel;
pub use accordion_section::AccordionSection;
pub use category_card::CategoryCard;
pub use task_card::TaskCard;
pub use completion_toast::CompletionToast;
