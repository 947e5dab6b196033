//! Reusable UI components
//!
//! All components use the imperial-court aesthetic with:
//! - Cinzel for headings
//! - Cormorant Garamond for body text
//! - Amber accents on slate

mod button;
mod icon;
mod section_heading;

pub use button::*;
pub use icon::*;
pub use section_heading::*;
