use crate::display::AspectRatio;
use crate::types::*;
use crate::units::{from_inches, round_for_unit};

/// Human-readable results shown next to the preview
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySummary {
    pub unit: Unit,
    /// Screen diagonal in inches, two decimals
    pub diagonal_in: f64,
    /// Screen diagonal in `unit`
    pub diagonal_unit: f64,
    /// Screen size in inches, one decimal
    pub screen_in: (f64, f64),
    pub screen_unit: (f64, f64),
    /// Device size in inches, one decimal
    pub device_in: (f64, f64),
    pub device_unit: (f64, f64),
    pub resolution: (u32, u32),
    pub ppi: u32,
    pub aspect_ratio: AspectRatio,
    /// Total pixels in millions, two decimals
    pub megapixels: f64,
}

impl DisplaySummary {
    /// Summarize a computed spec, expressing lengths in `unit` as well as inches
    pub fn new(spec: &ScreenSpec, unit: Unit) -> Self {
        let diagonal_in = round_to(spec.diagonal_in(), 2);
        let in_unit = |v: f64| round_for_unit(from_inches(v, unit), unit);
        let tenths = |v: f64| round_to(v, 1);

        Self {
            unit,
            diagonal_in,
            diagonal_unit: in_unit(diagonal_in),
            screen_in: (tenths(spec.screen_width_in), tenths(spec.screen_height_in)),
            screen_unit: (in_unit(spec.screen_width_in), in_unit(spec.screen_height_in)),
            device_in: (tenths(spec.device_width_in), tenths(spec.device_height_in)),
            device_unit: (in_unit(spec.device_width_in), in_unit(spec.device_height_in)),
            resolution: (spec.res_width, spec.res_height),
            ppi: spec.ppi.round() as u32,
            aspect_ratio: spec.aspect_ratio(),
            megapixels: round_to(spec.megapixels(), 2),
        }
    }

    /// Labelled lines, in display order
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let u = self.unit;
        vec![
            (
                "Screen Diagonal",
                format!(
                    "{:.2} inches ({} {u})",
                    self.diagonal_in, self.diagonal_unit
                ),
            ),
            (
                "Screen Dimensions",
                format!(
                    "{}\" × {}\" ({} {u} × {} {u})",
                    self.screen_in.0, self.screen_in.1, self.screen_unit.0, self.screen_unit.1
                ),
            ),
            (
                "Device Dimensions",
                format!(
                    "{}\" × {}\" ({} {u} × {} {u})",
                    self.device_in.0, self.device_in.1, self.device_unit.0, self.device_unit.1
                ),
            ),
            (
                "Resolution",
                format!("{} × {} pixels", self.resolution.0, self.resolution.1),
            ),
            ("Pixel Density", format!("{} PPI", self.ppi)),
            ("Aspect Ratio", self.aspect_ratio.to_string()),
            ("Total Pixels", format!("{:.2} megapixels", self.megapixels)),
        ]
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
