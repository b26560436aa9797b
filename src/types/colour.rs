//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::{AvatarError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// The bot ring and template badge red.
    pub const BOT_RED: Self = Self::rgb(229, 57, 53);

    /// Parse a hex colour string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`, `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => {
                return Err(AvatarError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
                })
            }
        };

        let bytes = hex::decode(&expanded).map_err(|e| AvatarError::Parse {
            message: format!("Invalid hex colour {}: {}", s, e),
            help: None,
        })?;

        match bytes.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
            _ => Err(AvatarError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: None,
            }),
        }
    }

    /// Look up a CSS/SVG colour keyword such as `gold` or `navy`.
    pub fn from_css_name(name: &str) -> Option<Self> {
        palette::named::from_str(&name.trim().to_ascii_lowercase())
            .map(|c| Self::rgb(c.red, c.green, c.blue))
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

impl FromStr for Colour {
    type Err = AvatarError;

    /// Accepts hex notation or a CSS colour keyword.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().starts_with('#') {
            return Self::from_hex(s);
        }
        Self::from_css_name(s)
            .map(Ok)
            .unwrap_or_else(|| Self::from_hex(s))
            .map_err(|_| AvatarError::Parse {
                message: format!("Unknown colour: {}", s),
                help: Some("Use a colour name like 'gold' or hex like #E53935".to_string()),
            })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
