//! Size-proportional overlay geometry.
//!
//! All overlay measurements are fixed fractions of the output size, so a
//! stamped badge looks the same at 256px as at 1024px.

use serde::{Deserialize, Serialize};

/// Ratios used to lay out overlays, relative to the avatar size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Ring stroke width.
    pub ring_stroke: f64,
    /// Lower bound on the ring stroke, in pixels.
    pub ring_min_stroke: u32,
    /// Width of the bot badge (template or asset).
    pub bot_badge_width: f64,
    /// Distance of the bot badge from the bottom-right corner.
    pub bot_margin: f64,
    /// Width of a synthesized text label.
    pub label_width: f64,
    /// Height of a synthesized text label.
    pub label_height: f64,
    /// Width of the premium badge.
    pub premium_badge_width: f64,
    /// Distance of the premium badge from the bottom-right corner.
    pub premium_margin: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            ring_stroke: 0.059,
            ring_min_stroke: 4,
            bot_badge_width: 0.60,
            bot_margin: 0.078,
            label_width: 0.30,
            label_height: 0.10,
            premium_badge_width: 0.38,
            premium_margin: 0.146,
        }
    }
}

/// `round(size * ratio)`, never below 1.
pub fn scaled(size: u32, ratio: f64) -> u32 {
    ((size as f64 * ratio).round() as u32).max(1)
}

impl Geometry {
    /// Ring stroke width in pixels: `max(round(size * ring_stroke), ring_min_stroke)`.
    pub fn ring_stroke_px(&self, size: u32) -> u32 {
        ((size as f64 * self.ring_stroke).round() as u32).max(self.ring_min_stroke)
    }

    pub fn bot_margin_px(&self, size: u32) -> u32 {
        (size as f64 * self.bot_margin).round() as u32
    }

    pub fn premium_margin_px(&self, size: u32) -> u32 {
        (size as f64 * self.premium_margin).round() as u32
    }

    /// Dimensions of a synthesized label badge.
    pub fn label_size(&self, size: u32) -> (u32, u32) {
        (scaled(size, self.label_width), scaled(size, self.label_height))
    }
}

/// Scale `(src_w, src_h)` to `width`, preserving aspect ratio.
pub fn fit_width(width: u32, src_w: u32, src_h: u32) -> (u32, u32) {
    if src_w == 0 {
        return (width, width);
    }
    let height = (width as f64 * src_h as f64 / src_w as f64).round() as u32;
    (width, height.max(1))
}

/// Top-left corner of a `badge_w` x `badge_h` badge sitting `margin` pixels
/// in from the bottom-right corner of a `size` square.
pub fn bottom_right(size: u32, badge_w: u32, badge_h: u32, margin: u32) -> (i64, i64) {
    let size = size as i64;
    let margin = margin as i64;
    (
        size - badge_w as i64 - margin,
        size - badge_h as i64 - margin,
    )
}
