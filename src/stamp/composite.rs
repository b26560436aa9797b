//! Straight-alpha "source over" compositing and alpha-aware resampling.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Headroom for filter overshoot, which `imageops` clips at 1.0.
const PREMULTIPLIED_SCALE: f32 = 0.5;

/// Blend `src` over `dst` (both straight alpha).
pub fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let [sr, sg, sb, sa] = src.0;
    match sa {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let [dr, dg, db, da] = dst.0;
    let sa = sa as f32 / 255.0;
    let da = da as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(sr, dr),
        channel(sg, dg),
        channel(sb, db),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Composite `src` over `dst` with its top-left corner at (`x`, `y`).
///
/// Parts of `src` falling outside `dst` are clipped.
pub fn composite_over(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (dst.width() as i64, dst.height() as i64);

    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = x + sx as i64;
        let dy = y + sy as i64;
        if dx < 0 || dy < 0 || dx >= dw || dy >= dh {
            continue;
        }
        let target = dst.get_pixel_mut(dx as u32, dy as u32);
        *target = blend(*target, *pixel);
    }
}

/// Resize a straight-alpha image with premultiplied filtering.
///
/// Fully transparent pixels carry no colour into their neighbours, so a
/// single-colour silhouette keeps exactly that colour wherever the result
/// has alpha > 0.
pub fn resize_premultiplied(img: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    let mut premultiplied = Rgba32FImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(premultiplied.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = a as f32 / 255.0 * PREMULTIPLIED_SCALE;
        let channel = |c: u8| c as f32 / 255.0 * alpha;
        *dst = Rgba([channel(r), channel(g), channel(b), alpha]);
    }

    let resized = imageops::resize(&premultiplied, width, height, filter);

    let mut out = RgbaImage::new(width, height);
    for (src, dst) in resized.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = (a / PREMULTIPLIED_SCALE * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 {
            continue;
        }
        let channel = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        *dst = Rgba([channel(r), channel(g), channel(b), alpha]);
    }

    out
}
