//! Shared constants for display math and preview rendering
//!
//! This module centralizes magic numbers used by the converters,
//! the pattern generator and the viewport.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Logical pixels per inch assumed when the display is not calibrated (CSS reference pixel)
pub const REFERENCE_PPI: f64 = 96.0;

// =============================================================================
// Aspect Ratios
// =============================================================================

/// Absolute tolerance when matching a raw ratio against a named one
pub const NAMED_RATIO_TOLERANCE: f64 = 0.01;

// =============================================================================
// Viewport
// =============================================================================

/// Smallest allowed zoom
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed zoom
pub const MAX_SCALE: f64 = 5.0;

/// Scale multiplier for one wheel step towards the user
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale multiplier for one wheel step away from the user
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// =============================================================================
// Pattern
// =============================================================================

/// Gradient color stops as (offset, RGB)
pub const GRADIENT_STOPS: [(f64, [u8; 3]); 5] = [
    (0.0, [0xFF, 0x00, 0x80]),
    (0.25, [0xFF, 0x8C, 0x00]),
    (0.5, [0x40, 0xE0, 0xD0]),
    (0.75, [0x93, 0x70, 0xDB]),
    (1.0, [0x00, 0xCE, 0xD1]),
];

/// Checkerboard tiles per shorter side when no tile size is given
pub const DEFAULT_TILES_PER_SIDE: u32 = 20;

/// Label font size as a fraction of the pattern width (1/20)
pub const LABEL_WIDTH_DIVISOR: f64 = 20.0;

/// Smallest label font size
pub const MIN_LABEL_FONT_SIZE: f64 = 20.0;

/// Glyph height relative to the font size
pub const CAP_HEIGHT_RATIO: f64 = 0.7;

/// Label alpha (90% opaque)
pub const LABEL_ALPHA: u8 = 230;

/// Largest pattern edge we are willing to allocate
pub const MAX_PATTERN_DIMENSION: u32 = 16_384;

/// Largest total pixel count (64 Mpx, 256 MiB of RGBA)
pub const MAX_PATTERN_PIXELS: u64 = 64 * 1024 * 1024;
