//! Text label synthesis.
//!
//! When no badge template is available a flat label (e.g. "BOT") is drawn
//! from a builtin 5x7 bitmap font. The rasterised glyphs become an alpha mask
//! which then goes through [`colorize`](super::colorize), so a synthesized
//! label obeys the same colour/alpha contract as a recoloured template.
//!
//! Glyph grids use `#` for an inked pixel and `.` for background.

use image::{Rgba, RgbaImage};

use crate::types::Colour;

use super::colorize;

/// Width of every builtin glyph, in font pixels.
pub const GLYPH_WIDTH: usize = 5;

/// Height of every builtin glyph, in font pixels.
pub const GLYPH_HEIGHT: usize = 7;

/// Blank columns between adjacent glyphs.
const GLYPH_SPACING: usize = 1;

/// Share of the canvas height the text should fill.
const HEIGHT_FILL: f64 = 0.8;

/// Share of the canvas width the text may occupy.
const WIDTH_FILL: f64 = 0.9;

/// A single bitmap glyph.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub ch: char,
    rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    const fn new(ch: char, rows: [&'static str; GLYPH_HEIGHT]) -> Self {
        Self { ch, rows }
    }

    /// Whether the font pixel at (x, y) is inked.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.as_bytes().get(x))
            .is_some_and(|&b| b == b'#')
    }
}

/// Builtin bitmap font covering A-Z, 0-9, space and `-`.
pub struct BitmapFont;

impl BitmapFont {
    /// Look up a glyph. Lowercase letters map to their uppercase form.
    pub fn get(ch: char) -> Option<&'static Glyph> {
        let ch = ch.to_ascii_uppercase();
        GLYPHS.iter().find(|g| g.ch == ch)
    }

    /// Width in font pixels of a line of `len` glyphs.
    pub fn line_width(len: usize) -> usize {
        if len == 0 {
            0
        } else {
            len * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING
        }
    }
}

/// Render `text` in `colour`, centred on a transparent `width` x `height` canvas.
///
/// The integer scale is picked so the text fills most of the canvas height,
/// then reduced until it fits the width. Unknown characters render blank.
pub fn render_label(text: &str, colour: Colour, width: u32, height: u32) -> RgbaImage {
    let chars: Vec<char> = text.chars().collect();
    let mut mask = RgbaImage::new(width, height);

    let cols = BitmapFont::line_width(chars.len());
    if cols == 0 || width == 0 || height == 0 {
        return mask;
    }

    let by_height = (height as f64 * HEIGHT_FILL / GLYPH_HEIGHT as f64).floor() as usize;
    let by_width = (width as f64 * WIDTH_FILL / cols as f64).floor() as usize;
    let scale = by_height.min(by_width).max(1);

    let text_w = (cols * scale) as i64;
    let text_h = (GLYPH_HEIGHT * scale) as i64;
    let origin_x = (width as i64 - text_w) / 2;
    let origin_y = (height as i64 - text_h) / 2;

    let ink = Rgba([255, 255, 255, 255]);

    for (i, ch) in chars.iter().enumerate() {
        let Some(glyph) = BitmapFont::get(*ch) else {
            continue;
        };
        let glyph_x = origin_x + (i * (GLYPH_WIDTH + GLYPH_SPACING) * scale) as i64;

        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                if !glyph.is_set(gx, gy) {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = glyph_x + (gx * scale + sx) as i64;
                        let py = origin_y + (gy * scale + sy) as i64;
                        if px >= 0 && py >= 0 && px < width as i64 && py < height as i64 {
                            mask.put_pixel(px as u32, py as u32, ink);
                        }
                    }
                }
            }
        }
    }

    colorize(&mask, colour)
}

#[rustfmt::skip]
static GLYPHS: &[Glyph] = &[
    Glyph::new(' ', [".....", ".....", ".....", ".....", ".....", ".....", "....."]),
    Glyph::new('-', [".....", ".....", ".....", "#####", ".....", ".....", "....."]),
    Glyph::new('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    Glyph::new('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    Glyph::new('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    Glyph::new('D', ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
    Glyph::new('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    Glyph::new('F', ["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
    Glyph::new('G', [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
    Glyph::new('H', ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    Glyph::new('I', [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    Glyph::new('J', ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    Glyph::new('K', ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
    Glyph::new('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    Glyph::new('M', ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
    Glyph::new('N', ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
    Glyph::new('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    Glyph::new('P', ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
    Glyph::new('Q', [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    Glyph::new('R', ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
    Glyph::new('S', [".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
    Glyph::new('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    Glyph::new('U', ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    Glyph::new('V', ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
    Glyph::new('W', ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
    Glyph::new('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
    Glyph::new('Y', ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
    Glyph::new('Z', ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
    Glyph::new('0', [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
    Glyph::new('1', ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    Glyph::new('2', [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
    Glyph::new('3', ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."]),
    Glyph::new('4', ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
    Glyph::new('5', ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
    Glyph::new('6', ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."]),
    Glyph::new('7', ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
    Glyph::new('8', [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
    Glyph::new('9', [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."]),
];
