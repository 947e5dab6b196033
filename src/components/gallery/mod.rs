//! Character Gallery
//!
//! Card grid plus the detail overlay it opens.

mod character_card;
mod character_gallery;
mod character_modal;
mod profile_item;
mod radar_chart;

pub use character_card::CharacterCard;
pub use character_gallery::CharacterGallery;
pub use character_modal::CharacterModal;
pub use profile_item::ProfileItem;
pub use radar_chart::PersonalityRadar;
