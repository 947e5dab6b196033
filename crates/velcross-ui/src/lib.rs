//! Velcross Chronicles UI Components
//!
//! Small Dioxus primitives shared by every section of the site, styled by
//! the global stylesheet in the app crate.
//!
//! ## Design Language
//!
//! Candle-lit imperial court at night:
//! - **Amber (#f59e0b)**: titles, icons, the active nav item
//! - **Slate (#020617 - #1e293b)**: backgrounds and panel surfaces
//! - Per-character accents come from `ColorTheme` in the core crate
//!
//! Display type is Cinzel, body text is Cormorant Garamond.

pub mod components;

pub use components::*;
