//! Avatar stamper.
//!
//! Composites status overlays onto a square avatar:
//!
//! - **bot**: a red ring inscribed in the square, then a badge in the
//!   bottom-right corner resolved through the [`BadgeResolver`] chain
//! - **premium**: the premium badge in the bottom-right corner, no ring
//!
//! A missing badge never fails the stamp; it is reported as a
//! [`StampWarning`] and the avatar is produced without that overlay.
//! Stamping is not idempotent, so always stamp a clean base image.

mod composite;
mod geometry;
mod resolver;
mod ring;

use std::fmt;
use std::path::PathBuf;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::assets::AssetStore;
use crate::colorize::ColourTable;
use crate::error::Result;
use crate::types::{BadgeColour, Variant};

pub use composite::{blend, composite_over, resize_premultiplied};
pub use geometry::{bottom_right, fit_width, scaled, Geometry};
pub use resolver::{
    AssetFileResolver, BadgeResolver, BadgeSource, LabelResolver, ResolvedBadge, TemplateResolver,
};
pub use ring::{on_ring, ring_layer, RING_COLOUR};

/// Text drawn by the label fallback.
pub const LABEL_TEXT: &str = "BOT";

/// Non-fatal problems encountered while stamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StampWarning {
    /// No pre-rendered asset for the colour; a fallback badge was used.
    BadgeFallback {
        colour: BadgeColour,
        path: PathBuf,
        source: BadgeSource,
    },
    /// No resolver produced a bot badge.
    MissingBadge { colour: BadgeColour, path: PathBuf },
    /// The premium badge file is absent.
    MissingPremiumBadge { path: PathBuf },
}

impl fmt::Display for StampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampWarning::BadgeFallback {
                colour,
                path,
                source,
            } => write!(
                f,
                "{} badge not found at {}, using {} fallback",
                colour,
                path.display(),
                source
            ),
            StampWarning::MissingBadge { colour, path } => {
                write!(f, "{} badge not found at {}", colour, path.display())
            }
            StampWarning::MissingPremiumBadge { path } => {
                write!(f, "premium badge not found at {}", path.display())
            }
        }
    }
}

/// Where a badge landed on the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Result of a stamp operation.
#[derive(Debug, Clone)]
pub struct StampOutcome {
    pub image: RgbaImage,
    pub warnings: Vec<StampWarning>,
    /// Stroke width of the ring, if one was drawn.
    pub ring_stroke: Option<u32>,
    /// Badge placement and origin, if a badge was drawn.
    pub badge: Option<(Placement, BadgeSource)>,
}

/// Stamps bot/premium overlays onto avatars.
pub struct Stamper {
    store: AssetStore,
    geometry: Geometry,
    resolvers: Vec<Box<dyn BadgeResolver>>,
}

impl Stamper {
    /// Create a stamper with the default geometry and resolver chain.
    pub fn new(store: AssetStore) -> Self {
        Self::with_config(store, Geometry::default(), ColourTable::new())
    }

    /// Create a stamper with custom geometry and colour table.
    pub fn with_config(store: AssetStore, geometry: Geometry, colours: ColourTable) -> Self {
        let resolvers: Vec<Box<dyn BadgeResolver>> = vec![
            Box::new(AssetFileResolver::new(store.clone())),
            Box::new(TemplateResolver::new(store.clone(), colours.clone())),
            Box::new(LabelResolver::new(LABEL_TEXT, geometry, colours)),
        ];
        Self {
            store,
            geometry,
            resolvers,
        }
    }

    /// Replace the badge resolver chain.
    pub fn with_resolvers(mut self, resolvers: Vec<Box<dyn BadgeResolver>>) -> Self {
        self.resolvers = resolvers;
        self
    }

    /// Resize `avatar` to `size` x `size` with premultiplied Lanczos3 unless it
    /// already is.
    pub fn prepare(avatar: &RgbaImage, size: u32) -> RgbaImage {
        if avatar.dimensions() == (size, size) {
            avatar.clone()
        } else {
            resize_premultiplied(avatar, size, size, FilterType::Lanczos3)
        }
    }

    /// Stamp `avatar` (resized to `size` first if needed).
    pub fn stamp(
        &self,
        avatar: &RgbaImage,
        size: u32,
        variant: Variant,
        colour: BadgeColour,
    ) -> Result<StampOutcome> {
        let mut outcome = StampOutcome {
            image: Self::prepare(avatar, size),
            warnings: Vec::new(),
            ring_stroke: None,
            badge: None,
        };

        match variant {
            Variant::Bot => self.stamp_bot(&mut outcome, size, colour)?,
            Variant::Premium => self.stamp_premium(&mut outcome, size)?,
        }

        Ok(outcome)
    }

    fn stamp_bot(&self, outcome: &mut StampOutcome, size: u32, colour: BadgeColour) -> Result<()> {
        let stroke = self.geometry.ring_stroke_px(size);
        let ring = ring_layer(size, stroke, RING_COLOUR);
        composite_over(&mut outcome.image, &ring, 0, 0);
        outcome.ring_stroke = Some(stroke);

        let asset_path = self.store.badge_path(colour.name());
        let Some(badge) = self.resolve_badge(colour, size)? else {
            outcome.warnings.push(StampWarning::MissingBadge {
                colour,
                path: asset_path,
            });
            return Ok(());
        };

        if badge.source != BadgeSource::Asset {
            outcome.warnings.push(StampWarning::BadgeFallback {
                colour,
                path: asset_path,
                source: badge.source,
            });
        }

        let (width, height) = if badge.source.is_label() {
            self.geometry.label_size(size)
        } else {
            fit_width(
                scaled(size, self.geometry.bot_badge_width),
                badge.image.width(),
                badge.image.height(),
            )
        };
        let margin = self.geometry.bot_margin_px(size);
        let placement = place_badge(&mut outcome.image, &badge.image, width, height, margin);
        outcome.badge = Some((placement, badge.source));

        Ok(())
    }

    fn stamp_premium(&self, outcome: &mut StampOutcome, size: u32) -> Result<()> {
        let Some(badge) = self.store.load_premium()? else {
            outcome.warnings.push(StampWarning::MissingPremiumBadge {
                path: self.store.premium_path(),
            });
            return Ok(());
        };

        let (width, height) = fit_width(
            scaled(size, self.geometry.premium_badge_width),
            badge.width(),
            badge.height(),
        );
        let margin = self.geometry.premium_margin_px(size);
        let placement = place_badge(&mut outcome.image, &badge, width, height, margin);
        outcome.badge = Some((placement, BadgeSource::Asset));

        Ok(())
    }

    /// Try each resolver in order and return the first badge produced.
    pub fn resolve_badge(&self, colour: BadgeColour, size: u32) -> Result<Option<ResolvedBadge>> {
        for resolver in &self.resolvers {
            if let Some(badge) = resolver.resolve(colour, size)? {
                return Ok(Some(badge));
            }
        }
        Ok(None)
    }
}

/// Scale `badge` to `width` x `height` and composite it `margin` pixels in
/// from the bottom-right corner of the square `avatar`.
pub fn place_badge(
    avatar: &mut RgbaImage,
    badge: &RgbaImage,
    width: u32,
    height: u32,
    margin: u32,
) -> Placement {
    let scaled_badge = if badge.dimensions() == (width, height) {
        badge.clone()
    } else {
        resize_premultiplied(badge, width, height, FilterType::Lanczos3)
    };

    let (x, y) = bottom_right(avatar.width(), width, height, margin);
    composite_over(avatar, &scaled_badge, x, y);

    Placement {
        x,
        y,
        width,
        height,
    }
}
