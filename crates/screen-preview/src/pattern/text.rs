//! Minimal bitmap text for the resolution label

use image::{Pixel, Rgba, RgbaImage};

use crate::constants::CAP_HEIGHT_RATIO;

const GLYPH_COLUMNS: u32 = 3;
const GLYPH_ROWS: u32 = 5;
/// Columns per character including one column of spacing
const GLYPH_ADVANCE: u32 = GLYPH_COLUMNS + 1;

/// 3×5 glyph rows, most significant bit on the left
fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '×' | 'x' => [0b000, 0b101, 0b010, 0b101, 0b000],
        _ => [0b000; 5],
    }
}

/// Size of one glyph cell in pixels for a given font size
fn cell_size(font_size: f64) -> f64 {
    (font_size * CAP_HEIGHT_RATIO / f64::from(GLYPH_ROWS)).max(1.0)
}

/// Width and height of `text` in pixels
pub(crate) fn measure(text: &str, font_size: f64) -> (f64, f64) {
    let cell = cell_size(font_size);
    let chars = text.chars().count() as f64;
    let width = if chars == 0.0 {
        0.0
    } else {
        (chars * f64::from(GLYPH_ADVANCE) - 1.0) * cell
    };
    (width, f64::from(GLYPH_ROWS) * cell)
}

/// Alpha-blend `text` centered on `image`, clipping at the edges
pub(crate) fn draw_centered(image: &mut RgbaImage, text: &str, font_size: f64, color: Rgba<u8>) {
    let cell = cell_size(font_size);
    let (text_w, text_h) = measure(text, font_size);
    let origin_x = f64::from(image.width()) / 2.0 - text_w / 2.0;
    let origin_y = f64::from(image.height()) / 2.0 - text_h / 2.0;

    for (index, c) in text.chars().enumerate() {
        let char_x = origin_x + (index as u32 * GLYPH_ADVANCE) as f64 * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if (bits >> (GLYPH_COLUMNS - 1 - col)) & 1 == 0 {
                    continue;
                }
                let left = char_x + f64::from(col) * cell;
                let top = origin_y + row as f64 * cell;
                fill_rect(image, left, top, cell, cell, color);
            }
        }
    }
}

fn fill_rect(image: &mut RgbaImage, left: f64, top: f64, w: f64, h: f64, color: Rgba<u8>) {
    let clamp_x = |v: f64| v.round().clamp(0.0, f64::from(image.width())) as u32;
    let clamp_y = |v: f64| v.round().clamp(0.0, f64::from(image.height())) as u32;
    let (x0, x1) = (clamp_x(left), clamp_x(left + w));
    let (y0, y1) = (clamp_y(top), clamp_y(top + h));

    for y in y0..y1 {
        for x in x0..x1 {
            image.get_pixel_mut(x, y).blend(&color);
        }
    }
}
