//! Badge colorizer.
//!
//! Produces exact-geometry colour variants of a badge template. The template's
//! alpha channel is the mask: every pixel with alpha > 0 takes the target RGB
//! and keeps its alpha, every other pixel becomes `(0, 0, 0, 0)`. RGB values
//! of the template are never consulted, so anti-aliased edges survive intact.

pub mod label;

use std::collections::BTreeMap;

use image::{Rgba, RgbaImage};

use crate::error::{AvatarError, Result};
use crate::types::{BadgeColour, Colour};

pub use label::{render_label, BitmapFont, Glyph};

/// Recolour a badge template, preserving its alpha channel byte-for-byte.
pub fn colorize(template: &RgbaImage, colour: Colour) -> RgbaImage {
    let mut out = RgbaImage::new(template.width(), template.height());

    for (src, dst) in template.pixels().zip(out.pixels_mut()) {
        let a = src.0[3];
        if a > 0 {
            *dst = Rgba([colour.r, colour.g, colour.b, a]);
        }
    }

    out
}

/// Named colour variants owned by the colorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    entries: BTreeMap<String, Colour>,
}

impl Default for ColourTable {
    fn default() -> Self {
        let entries = BadgeColour::ALL
            .iter()
            .map(|c| (c.name().to_string(), c.colour()))
            .collect();
        Self { entries }
    }
}

impl ColourTable {
    /// Create a table containing the builtin badge colours (red, black, white).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named colour. Names are case-insensitive.
    pub fn insert(&mut self, name: impl AsRef<str>, colour: Colour) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), colour.with_alpha(255));
    }

    /// Merge `name -> colour` string pairs, e.g. from a config file.
    pub fn extend_from_strings<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<()> {
        for (name, value) in pairs {
            let colour = value.parse::<Colour>().map_err(|e| AvatarError::Config {
                message: format!("colour '{}': {}", name, e),
                help: Some("Colour values must be hex (#RRGGBB) or CSS colour names".to_string()),
            })?;
            self.insert(name, colour);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries.get(&name.to_ascii_lowercase()).copied()
    }

    /// Resolve a name through the table first, then as hex or a CSS keyword.
    pub fn resolve(&self, name: &str) -> Result<Colour> {
        match self.get(name) {
            Some(colour) => Ok(colour),
            None => name.parse::<Colour>().map(|c| c.with_alpha(255)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Colorize one template into every named variant, in the order given.
pub fn colorize_all<S: AsRef<str>>(
    template: &RgbaImage,
    table: &ColourTable,
    names: &[S],
) -> Result<Vec<(String, RgbaImage)>> {
    names
        .iter()
        .map(|name| -> Result<(String, RgbaImage)> {
            let name = name.as_ref();
            let colour = table.resolve(name)?;
            Ok((name.to_ascii_lowercase(), colorize(template, colour)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// 100x100 template with an opaque 20x20 centre square in a junk colour.
    fn centre_square() -> RgbaImage {
        RgbaImage::from_fn(100, 100, |x, y| {
            if (40..60).contains(&x) && (40..60).contains(&y) {
                Rgba([12, 200, 99, 255])
            } else {
                Rgba([255, 255, 255, 0])
            }
        })
    }

    fn alpha_channel(img: &RgbaImage) -> Vec<u8> {
        img.pixels().map(|p| p.0[3]).collect()
    }

    #[test]
    fn test_colorize_centre_square_black() {
        let out = colorize(&centre_square(), Colour::BLACK);

        assert_eq!(out.dimensions(), (100, 100));
        for (x, y, p) in out.enumerate_pixels() {
            let inside = (40..60).contains(&x) && (40..60).contains(&y);
            if inside {
                assert_eq!(p.0, [0, 0, 0, 255], "at ({}, {})", x, y);
            } else {
                assert_eq!(p.0, [0, 0, 0, 0], "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_colorize_preserves_partial_alpha() {
        let template = RgbaImage::from_fn(4, 1, |x, _| Rgba([255, 255, 255, [0, 1, 128, 255][x as usize]]));
        let out = colorize(&template, Colour::BOT_RED);

        assert_eq!(alpha_channel(&out), alpha_channel(&template));
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(1, 0).0, [229, 57, 53, 1]);
        assert_eq!(out.get_pixel(2, 0).0, [229, 57, 53, 128]);
        assert_eq!(out.get_pixel(3, 0).0, [229, 57, 53, 255]);
    }

    #[test]
    fn test_colorize_ignores_template_rgb() {
        // Semi-transparent white would be dropped by a "non-white" threshold.
        let template = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 90]));
        let out = colorize(&template, Colour::BLACK);
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 90]));
    }

    #[test]
    fn test_colorize_fully_transparent() {
        let template = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 0]));
        let out = colorize(&template, Colour::WHITE);
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_variants_share_silhouette() {
        let template = centre_square();
        let black = colorize(&template, Colour::BLACK);
        let white = colorize(&template, Colour::WHITE);

        assert_eq!(alpha_channel(&black), alpha_channel(&white));
        assert_ne!(black.get_pixel(50, 50), white.get_pixel(50, 50));
    }

    #[test]
    fn test_colour_table_defaults() {
        let table = ColourTable::new();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("RED"), Some(Colour::BOT_RED));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["black", "red", "white"]);
    }

    #[test]
    fn test_colour_table_resolve() {
        let mut table = ColourTable::new();
        table.insert("Gold", Colour::new(255, 200, 0, 10));

        assert_eq!(table.resolve("gold").unwrap(), Colour::rgb(255, 200, 0));
        assert_eq!(table.resolve("#010203").unwrap(), Colour::rgb(1, 2, 3));
        assert_eq!(table.resolve("navy").unwrap(), Colour::rgb(0, 0, 128));
        assert!(table.resolve("nope").is_err());
    }

    #[test]
    fn test_colour_table_extend_from_strings() {
        let mut table = ColourTable::new();
        let pairs = BTreeMap::from([("teal".to_string(), "#008080".to_string())]);
        table.extend_from_strings(&pairs).unwrap();
        assert_eq!(table.get("teal"), Some(Colour::rgb(0, 128, 128)));

        let bad = BTreeMap::from([("x".to_string(), "???".to_string())]);
        assert!(table.extend_from_strings(&bad).is_err());
    }

    #[test]
    fn test_colorize_all() {
        let table = ColourTable::new();
        let variants = colorize_all(&centre_square(), &table, &["black", "White"]).unwrap();

        let names: Vec<&str> = variants.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["black", "white"]);
        assert_eq!(variants[1].1.get_pixel(45, 45).0, [255, 255, 255, 255]);
    }
}
