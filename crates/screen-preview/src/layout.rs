//! On-screen geometry for the true-size preview

use crate::types::{ImageFit, ScreenSpec};

/// Device and screen rectangles in logical units at true physical size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub device_size: (f64, f64),
    pub screen_size: (f64, f64),
}

impl PreviewLayout {
    /// `points_per_inch` comes from [`crate::SelfDisplay::points_per_inch`]
    pub fn new(spec: &ScreenSpec, points_per_inch: f64) -> Self {
        Self {
            device_size: (
                spec.device_width_in * points_per_inch,
                spec.device_height_in * points_per_inch,
            ),
            screen_size: (
                spec.screen_width_in * points_per_inch,
                spec.screen_height_in * points_per_inch,
            ),
        }
    }
}

impl ImageFit {
    /// Normalized texture rectangle `[min_u, min_v, max_u, max_v]` that
    /// realizes this fit for an image drawn into a `target` sized box
    pub fn uv_rect(self, image: (f64, f64), target: (f64, f64)) -> [f64; 4] {
        let full = [0.0, 0.0, 1.0, 1.0];
        if self == ImageFit::Stretch || image.0 <= 0.0 || image.1 <= 0.0 {
            return full;
        }
        if target.0 <= 0.0 || target.1 <= 0.0 {
            return full;
        }

        let image_aspect = image.0 / image.1;
        let target_aspect = target.0 / target.1;
        if image_aspect > target_aspect {
            // Wider than the box: crop left and right
            let visible = target_aspect / image_aspect;
            let margin = (1.0 - visible) / 2.0;
            [margin, 0.0, 1.0 - margin, 1.0]
        } else {
            let visible = image_aspect / target_aspect;
            let margin = (1.0 - visible) / 2.0;
            [0.0, margin, 1.0, 1.0 - margin]
        }
    }
}
