//! Ring overlay for the bot variant.

use image::{Rgba, RgbaImage};

use crate::types::Colour;

/// Stroke colour of the bot ring.
pub const RING_COLOUR: Colour = Colour::BOT_RED;

/// Whether pixel (x, y) lies on a ring of width `stroke` inscribed in a
/// `size` square. Pixels are sampled at their centres.
pub fn on_ring(size: u32, stroke: u32, x: u32, y: u32) -> bool {
    let centre = size as f64 / 2.0;
    let outer = centre;
    let inner = (outer - stroke as f64).max(0.0);

    let dx = x as f64 + 0.5 - centre;
    let dy = y as f64 + 0.5 - centre;
    let dist = (dx * dx + dy * dy).sqrt();

    dist >= inner && dist <= outer
}

/// Draw an unfilled circle on a transparent `size` x `size` layer.
pub fn ring_layer(size: u32, stroke: u32, colour: Colour) -> RgbaImage {
    let ink: Rgba<u8> = colour.into();
    let mut layer = RgbaImage::new(size, size);

    for (x, y, pixel) in layer.enumerate_pixels_mut() {
        if on_ring(size, stroke, x, y) {
            *pixel = ink;
        }
    }

    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_touches_edge_midpoints() {
        let layer = ring_layer(1024, 60, RING_COLOUR);
        assert_eq!(layer.get_pixel(0, 512).0, [229, 57, 53, 255]);
        assert_eq!(layer.get_pixel(1023, 512).0, [229, 57, 53, 255]);
        assert_eq!(layer.get_pixel(512, 0).0, [229, 57, 53, 255]);
        assert_eq!(layer.get_pixel(512, 1023).0, [229, 57, 53, 255]);
    }

    #[test]
    fn test_ring_stroke_width() {
        let layer = ring_layer(1024, 60, RING_COLOUR);
        let inked = (0..512).filter(|&x| layer.get_pixel(x, 512).0[3] > 0).count();
        assert_eq!(inked, 60);
    }

    #[test]
    fn test_ring_leaves_corners_and_centre_empty() {
        let layer = ring_layer(256, 15, RING_COLOUR);
        assert_eq!(layer.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(layer.get_pixel(255, 255).0, [0, 0, 0, 0]);
        assert_eq!(layer.get_pixel(128, 128).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_wide_stroke_fills_disc() {
        assert!(on_ring(10, 50, 5, 5));
    }
}
