//! Physical size estimate for the viewer's own screen

use crate::constants::REFERENCE_PPI;
use crate::display::diagonal;

/// How the viewer's display was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration {
    /// Assumed 96 logical pixels per inch
    Estimated,
    /// Derived from a diagonal the user typed in
    ManualDiagonal,
}

/// The viewer's screen in physical terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfDisplay {
    /// Physical (device) pixels
    pub pixel_width: f64,
    pub pixel_height: f64,
    /// Logical-to-physical pixel ratio
    pub pixel_ratio: f64,
    /// Physical pixels per inch
    pub ppi: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub diagonal_in: f64,
    pub calibration: Calibration,
}

impl SelfDisplay {
    /// Logical units (CSS pixels / egui points) per physical inch
    pub fn points_per_inch(&self) -> f64 {
        self.ppi / self.pixel_ratio
    }
}

/// Estimate the viewer's screen from its logical size and pixel ratio.
///
/// A positive `manual_diagonal_in` calibrates the result; otherwise the
/// 96 units-per-inch reference density is assumed.
pub fn estimate_self_display(
    logical_width: f64,
    logical_height: f64,
    pixel_ratio: f64,
    manual_diagonal_in: Option<f64>,
) -> SelfDisplay {
    let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let pixel_width = logical_width * pixel_ratio;
    let pixel_height = logical_height * pixel_ratio;

    let manual = manual_diagonal_in
        .filter(|d| d.is_finite() && *d > 0.0)
        .filter(|_| diagonal(pixel_width, pixel_height) > 0.0);

    match manual {
        Some(diagonal_in) => {
            let ppi = diagonal(pixel_width, pixel_height) / diagonal_in;
            SelfDisplay {
                pixel_width,
                pixel_height,
                pixel_ratio,
                ppi,
                width_in: pixel_width / ppi,
                height_in: pixel_height / ppi,
                diagonal_in,
                calibration: Calibration::ManualDiagonal,
            }
        }
        None => {
            let width_in = logical_width / REFERENCE_PPI;
            let height_in = logical_height / REFERENCE_PPI;
            SelfDisplay {
                pixel_width,
                pixel_height,
                pixel_ratio,
                ppi: REFERENCE_PPI * pixel_ratio,
                width_in,
                height_in,
                diagonal_in: diagonal(width_in, height_in),
                calibration: Calibration::Estimated,
            }
        }
    }
}
