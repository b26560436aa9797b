//! Selector enums shared by the CLI and the library.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Colour;

/// Overlay style stamped onto an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Red ring plus "BOT" badge.
    #[default]
    Bot,
    /// Diamond "PREMIUM" badge, no ring.
    Premium,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Bot => "bot",
            Variant::Premium => "premium",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colour of the bot badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColour {
    #[default]
    Red,
    Black,
    White,
}

impl BadgeColour {
    pub const ALL: [BadgeColour; 3] = [BadgeColour::Red, BadgeColour::Black, BadgeColour::White];

    /// Key used in the colour table and in asset file names.
    pub fn name(self) -> &'static str {
        match self {
            BadgeColour::Red => "red",
            BadgeColour::Black => "black",
            BadgeColour::White => "white",
        }
    }

    pub fn colour(self) -> Colour {
        match self {
            BadgeColour::Red => Colour::BOT_RED,
            BadgeColour::Black => Colour::BLACK,
            BadgeColour::White => Colour::WHITE,
        }
    }
}

impl fmt::Display for BadgeColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prompt style used when generating a base avatar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Minimal,
    Friendly,
    Professional,
    Playful,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Minimal, Style::Friendly, Style::Professional, Style::Playful];

    pub fn name(self) -> &'static str {
        match self {
            Style::Minimal => "minimal",
            Style::Friendly => "friendly",
            Style::Professional => "professional",
            Style::Playful => "playful",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
