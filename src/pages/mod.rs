//! Pages
//!
//! Top-level views switched by `AppContext::navigate`.

mod landing;
mod cockpit;

pub use landing::LandingPage;
pub use cockpit::CockpitPage;
