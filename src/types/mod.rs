//! Core types for bot-avatar.

mod colour;
mod variant;

pub use colour::Colour;
pub use variant::{BadgeColour, Style, Variant};
