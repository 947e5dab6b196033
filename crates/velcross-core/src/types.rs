//! Core types for Velcross Chronicles

pub mod character;
pub mod lore;
pub mod theme;

pub use character::{Character, PersonalityStat};
pub use lore::WorldLore;
pub use theme::{ColorTheme, ThemePalette};
