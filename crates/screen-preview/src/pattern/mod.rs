//! Test pattern rasterization
//!
//! Patterns are rendered at exactly the target resolution so the preview
//! shows one pattern pixel per screen pixel.

mod io;
mod text;

pub use io::{encode_png, save_png};

use image::{Rgba, RgbaImage};

use crate::constants::*;
use crate::types::*;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render `kind` at `width` × `height` with the centered resolution label
pub fn render_pattern(width: u32, height: u32, kind: PatternKind) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(PreviewError::EmptyPattern);
    }
    let pixels = u64::from(width) * u64::from(height);
    if width > MAX_PATTERN_DIMENSION
        || height > MAX_PATTERN_DIMENSION
        || pixels > MAX_PATTERN_PIXELS
    {
        return Err(PreviewError::PatternTooLarge { width, height });
    }

    let (mut image, label_color) = match kind {
        PatternKind::Gradient => (
            render_gradient(width, height),
            Rgba([255, 255, 255, LABEL_ALPHA]),
        ),
        PatternKind::Checkerboard { tile_size } => {
            let tile = checker_tile_size(width, height, tile_size);
            log::debug!("Checkerboard {width} × {height} with {tile}px tiles");
            (
                render_checkerboard(width, height, tile),
                Rgba([255, 0, 0, LABEL_ALPHA]),
            )
        }
    };

    text::draw_centered(
        &mut image,
        &resolution_label(width, height),
        label_font_size(width),
        label_color,
    );

    Ok(image)
}

/// Text drawn in the middle of every pattern
pub fn resolution_label(width: u32, height: u32) -> String {
    format!("{width} × {height}")
}

/// Label font size: 1/20 of the width, never below 20
pub fn label_font_size(width: u32) -> f64 {
    (f64::from(width) / LABEL_WIDTH_DIVISOR).max(MIN_LABEL_FONT_SIZE)
}

/// Tile edge for the checkerboard. A missing or zero request falls back to
/// 1/20 of the shorter side, and the result is never below one pixel.
pub fn checker_tile_size(width: u32, height: u32, requested: Option<u32>) -> u32 {
    requested
        .filter(|size| *size > 0)
        .unwrap_or(width.min(height) / DEFAULT_TILES_PER_SIDE)
        .max(1)
}

/// Color of the tile at (`tile_x`, `tile_y`); even index sums are black
pub fn checker_tile_color(tile_x: u32, tile_y: u32) -> Rgba<u8> {
    if (tile_x % 2) ^ (tile_y % 2) == 0 {
        BLACK
    } else {
        WHITE
    }
}

/// Sample the five-stop gradient at `t` in [0, 1]
pub fn gradient_color(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let upper = GRADIENT_STOPS
        .iter()
        .position(|(offset, _)| t <= *offset)
        .unwrap_or(GRADIENT_STOPS.len() - 1)
        .max(1);
    let (start, from) = GRADIENT_STOPS[upper - 1];
    let (end, to) = GRADIENT_STOPS[upper];
    let local = (t - start) / (end - start);

    let mut rgb = [0u8; 3];
    for (channel, (a, b)) in rgb.iter_mut().zip(from.iter().zip(to.iter())) {
        let value = f64::from(*a) + (f64::from(*b) - f64::from(*a)) * local;
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    rgb
}

fn render_gradient(width: u32, height: u32) -> RgbaImage {
    let (w, h) = (f64::from(width), f64::from(height));
    let length_sq = w * w + h * h;

    RgbaImage::from_fn(width, height, |x, y| {
        // Project the pixel center onto the top-left → bottom-right vector
        let t = ((f64::from(x) + 0.5) * w + (f64::from(y) + 0.5) * h) / length_sq;
        let [r, g, b] = gradient_color(t);
        Rgba([r, g, b, 255])
    })
}

fn render_checkerboard(width: u32, height: u32, tile: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| checker_tile_color(x / tile, y / tile))
}
