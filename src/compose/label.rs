//! Caption bars for comparison tiles.
//!
//! A label is a white bar stacked above the tile with the caption drawn in
//! black from the `font8x8` bitmap font, scaled 2x. Non-ASCII characters
//! are skipped; text is clipped at the right edge of the bar.
use font8x8::legacy::BASIC_LEGACY;

use crate::compose::grid::vstack;
use crate::error::Result;
use crate::image::Image;

/// Height of the caption bar in pixels.
pub const LABEL_BAR_HEIGHT: usize = 40;

const GLYPH_SIZE: usize = 8;
const GLYPH_SCALE: usize = 2;
const TEXT_MARGIN_X: usize = 10;

/// Stack a captioned white bar above a tile.
pub fn add_label(img: &Image, text: &str) -> Result<Image> {
    let width = img.width();
    let channels = img.channels();
    let mut bar = vec![255u8; width * LABEL_BAR_HEIGHT * channels];

    let top = (LABEL_BAR_HEIGHT - GLYPH_SIZE * GLYPH_SCALE) / 2;
    let mut pen_x = TEXT_MARGIN_X;
    for ch in text.chars() {
        if !ch.is_ascii() {
            continue;
        }
        draw_glyph(&mut bar, width, channels, pen_x, top, ch);
        pen_x += GLYPH_SIZE * GLYPH_SCALE;
        if pen_x >= width {
            break;
        }
    }

    let bar = Image::from_vec(width, LABEL_BAR_HEIGHT, channels, bar)?;
    vstack(&bar, img)
}

fn draw_glyph(bar: &mut [u8], width: usize, channels: usize, origin_x: usize, top: usize, ch: char) {
    let glyph = BASIC_LEGACY[ch as usize];
    for (gy, row_bits) in glyph.iter().enumerate() {
        for gx in 0..GLYPH_SIZE {
            if row_bits & (1 << gx) == 0 {
                continue;
            }
            for sy in 0..GLYPH_SCALE {
                for sx in 0..GLYPH_SCALE {
                    let x = origin_x + gx * GLYPH_SCALE + sx;
                    let y = top + gy * GLYPH_SCALE + sy;
                    if x >= width {
                        continue;
                    }
                    let base = (y * width + x) * channels;
                    bar[base..base + channels].fill(0);
                }
            }
        }
    }
}
