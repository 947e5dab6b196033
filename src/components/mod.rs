//! UI Components for Velcross Chronicles.
//!
//! Candle-lit imperial court aesthetic components.

pub mod gallery;
mod hero;
mod mobile_nav;
mod nav_header;
mod world_guide;

pub use gallery::CharacterGallery;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use world_guide::WorldGuide;
