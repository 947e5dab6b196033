//! Catalogue context provider for Velcross Chronicles.
//!
//! Provides the static catalogue to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(Catalogue::shipped);
//!
//! // In child components
//! let catalogue = use_catalogue();
//! ```

use dioxus::prelude::*;
use velcross_core::{catalogue, Character, WorldLore};

/// Read-only view over the compiled-in records.
///
/// Both slices live for the whole process, so the handle is `Copy` and
/// components can hold it without cloning any records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Catalogue {
    pub characters: &'static [Character],
    pub world_lore: &'static [WorldLore],
}

impl Catalogue {
    /// The catalogue compiled into this build.
    pub fn shipped() -> Self {
        Self {
            characters: catalogue::characters(),
            world_lore: catalogue::world_lore(),
        }
    }
}

/// Hook to access the catalogue from context.
pub fn use_catalogue() -> Catalogue {
    use_context::<Catalogue>()
}
