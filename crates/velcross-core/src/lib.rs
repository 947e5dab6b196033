//! Velcross Chronicles Core Library
//!
//! Everything the fan-site needs that is not markup: the static catalogue of
//! characters and world lore, the view models the components render, and the
//! small finite-state values each component owns.
//!
//! ## Overview
//!
//! The site is a single scrollable document with three sections (landing,
//! world lore, characters). The only piece with real design content is the
//! gallery/detail flow:
//!
//! - [`Selection`] holds "no character" or exactly one selected [`Character`]
//! - [`CardView`] is what a gallery card shows (traits truncated to two)
//! - [`DetailView`] is what the overlay shows, built only while a character
//!   is selected
//! - [`RadarChart`] turns a stat sequence into polygon geometry
//!
//! ## Quick Start
//!
//! ```
//! use velcross_core::{catalogue, gallery_cards, DetailView, Selection};
//!
//! let cards = gallery_cards(catalogue::characters());
//! assert_eq!(cards.len(), catalogue::characters().len());
//!
//! let mut selection = Selection::default();
//! assert!(DetailView::for_selection(&selection).is_none());
//!
//! selection.select(catalogue::characters()[0].clone());
//! let detail = DetailView::for_selection(&selection).unwrap();
//! assert_eq!(detail.name, catalogue::characters()[0].name);
//! ```

pub mod catalogue;
pub mod detail;
pub mod error;
pub mod gallery;
pub mod lore;
pub mod navigation;
pub mod radar;
pub mod types;

// Re-exports
pub use catalogue::{audit, export_json, CHARACTERS, WORLD_LORE};
pub use detail::{DetailView, ProfileField};
pub use error::{CatalogueIssue, ChronicleError};
pub use gallery::{gallery_cards, CardView, OverlayHit, Selection, TRAIT_PREVIEW_LIMIT};
pub use lore::{lore_panels, LoreGlyph, LorePanel};
pub use navigation::{MenuState, NavState, Section};
pub use radar::{RadarAxis, RadarChart, RadarPoint, RadarTooltip};
pub use types::*;
