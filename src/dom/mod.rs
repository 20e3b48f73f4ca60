//! Element-level DOM helpers
//!
//! Thin wrappers over `headless_chrome::Element` that run small JavaScript
//! functions against a live node:
//! - ElementState: rendered text, value, visibility and bounding box
//! - css_property: computed style lookups
//! - clear_value / select_value / clear_text: form manipulation

pub mod element;

pub use element::{BoundingBox, ElementState, clear_text, clear_value, css_property, select_value};
