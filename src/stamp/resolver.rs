//! Badge resolution strategies.
//!
//! The stamper walks an ordered list of resolvers and uses the first one that
//! produces a badge for the requested colour. The default chain is:
//!
//! 1. [`AssetFileResolver`] - a pre-rendered `bot-badge-<colour>.png`
//! 2. [`TemplateResolver`] - the red template, recoloured on the fly
//! 3. [`LabelResolver`] - a synthesized text label

use std::fmt;

use image::RgbaImage;

use crate::assets::AssetStore;
use crate::colorize::{colorize, render_label, ColourTable};
use crate::error::Result;
use crate::types::BadgeColour;

use super::geometry::Geometry;

/// Where a resolved badge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSource {
    /// Pre-rendered asset file.
    Asset,
    /// Derived from the template by the colorizer.
    Template,
    /// Synthesized text label.
    Label,
}

impl BadgeSource {
    /// Whether the badge is a flat text label rather than a composed badge.
    /// Labels use their own size budget instead of aspect-fit scaling.
    pub fn is_label(self) -> bool {
        matches!(self, BadgeSource::Label)
    }
}

impl fmt::Display for BadgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeSource::Asset => write!(f, "asset"),
            BadgeSource::Template => write!(f, "template"),
            BadgeSource::Label => write!(f, "label"),
        }
    }
}

/// A badge raster together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedBadge {
    pub image: RgbaImage,
    pub source: BadgeSource,
}

/// Produces a badge raster for a colour, or `None` if this strategy can't.
pub trait BadgeResolver {
    /// Resolve a badge for `colour` on an avatar of `size` pixels.
    fn resolve(&self, colour: BadgeColour, size: u32) -> Result<Option<ResolvedBadge>>;
}

/// Loads a pre-rendered badge for the exact colour.
pub struct AssetFileResolver {
    store: AssetStore,
}

impl AssetFileResolver {
    pub fn new(store: AssetStore) -> Self {
        Self { store }
    }
}

impl BadgeResolver for AssetFileResolver {
    fn resolve(&self, colour: BadgeColour, _size: u32) -> Result<Option<ResolvedBadge>> {
        Ok(self.store.load_badge(colour.name())?.map(|image| ResolvedBadge {
            image,
            source: BadgeSource::Asset,
        }))
    }
}

/// Derives the colour from the red template via the colorizer.
pub struct TemplateResolver {
    store: AssetStore,
    colours: ColourTable,
}

impl TemplateResolver {
    pub fn new(store: AssetStore, colours: ColourTable) -> Self {
        Self { store, colours }
    }
}

impl BadgeResolver for TemplateResolver {
    fn resolve(&self, colour: BadgeColour, _size: u32) -> Result<Option<ResolvedBadge>> {
        let Some(template) = self.store.load_template()? else {
            return Ok(None);
        };
        let target = self.colours.resolve(colour.name())?;

        Ok(Some(ResolvedBadge {
            image: colorize(&template, target),
            source: BadgeSource::Template,
        }))
    }
}

/// Draws a text label sized by the label geometry. Always succeeds.
pub struct LabelResolver {
    text: String,
    geometry: Geometry,
    colours: ColourTable,
}

impl LabelResolver {
    pub fn new(text: impl Into<String>, geometry: Geometry, colours: ColourTable) -> Self {
        Self {
            text: text.into(),
            geometry,
            colours,
        }
    }
}

impl BadgeResolver for LabelResolver {
    fn resolve(&self, colour: BadgeColour, size: u32) -> Result<Option<ResolvedBadge>> {
        let (width, height) = self.geometry.label_size(size);
        let target = self.colours.resolve(colour.name())?;

        Ok(Some(ResolvedBadge {
            image: render_label(&self.text, target, width, height),
            source: BadgeSource::Label,
        }))
    }
}
