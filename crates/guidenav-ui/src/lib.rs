//! guidenav UI Components
//!
//! Dioxus components that render the navigation engine's snapshot:
//! - **OutlineNav**: desktop sidebar and mobile drawer, with the active
//!   section highlighted
//! - **ProgressBar**: reading progress fill bar
//! - **SaveToggle** / **StarRating**: per-article reader preferences
//!
//! Components are stateless with respect to the engine: they take values from
//! a `GuideSnapshot` and report user actions through event handlers.

pub mod components;

pub use components::*;
