use eframe::egui;
use screen_preview::{
    DimensionFields, InputMode, PatternKind, Preview, PreviewOptions, Unit, UnitTracker, Viewport,
};

use crate::ui_components::{format_decimal, parse_decimal, parse_pixels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeChoice {
    #[default]
    Resolution,
    Ppi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternChoice {
    #[default]
    Gradient,
    Checkerboard,
}

/// Raw text of every form field, parsed only when a preview is generated
pub struct FormState {
    pub unit: Unit,
    pub unit_tracker: UnitTracker,
    pub screen_width: String,
    pub screen_height: String,
    pub device_width: String,
    pub device_height: String,
    pub mode: ModeChoice,
    pub res_width: String,
    pub res_height: String,
    pub ppi: String,
    pub pattern: PatternChoice,
    pub tile_size: String,
}

impl Default for FormState {
    fn default() -> Self {
        let unit = Unit::default();
        Self {
            unit,
            unit_tracker: UnitTracker::new(unit),
            screen_width: String::new(),
            screen_height: String::new(),
            device_width: String::new(),
            device_height: String::new(),
            mode: ModeChoice::default(),
            res_width: String::new(),
            res_height: String::new(),
            ppi: String::new(),
            pattern: PatternChoice::default(),
            tile_size: String::new(),
        }
    }
}

impl FormState {
    fn dimensions(&self) -> DimensionFields {
        DimensionFields {
            screen_width: parse_decimal(&self.screen_width),
            screen_height: parse_decimal(&self.screen_height),
            device_width: parse_decimal(&self.device_width),
            device_height: parse_decimal(&self.device_height),
        }
    }

    /// Rewrite the dimension fields in `new_unit`; unparsable fields are left as typed
    pub fn change_unit(&mut self, new_unit: Unit) {
        let mut dims = self.dimensions();
        if self.unit_tracker.change_unit(new_unit, &mut dims).is_some() {
            let texts = [
                (&mut self.screen_width, dims.screen_width),
                (&mut self.screen_height, dims.screen_height),
                (&mut self.device_width, dims.device_width),
                (&mut self.device_height, dims.device_height),
            ];
            for (text, value) in texts {
                if value.is_some() {
                    *text = format_decimal(value);
                }
            }
            log::info!("Unit changed to {new_unit}");
        }
        self.unit = new_unit;
    }

    pub fn to_options(&self) -> PreviewOptions {
        let mode = match self.mode {
            ModeChoice::Resolution => InputMode::Resolution {
                width: parse_pixels(&self.res_width),
                height: parse_pixels(&self.res_height),
            },
            ModeChoice::Ppi => InputMode::Ppi(parse_decimal(&self.ppi)),
        };
        let pattern = match self.pattern {
            PatternChoice::Gradient => PatternKind::Gradient,
            PatternChoice::Checkerboard => PatternKind::Checkerboard {
                tile_size: parse_pixels(&self.tile_size),
            },
        };

        PreviewOptions {
            unit: self.unit,
            dimensions: self.dimensions(),
            mode,
            pattern,
        }
    }
}

/// Tracks active touch points so two-finger gestures can be turned into pinch events
#[derive(Default)]
pub struct TouchTracker {
    pub touches: Vec<(egui::TouchId, egui::Pos2)>,
}

impl TouchTracker {
    /// Distance between the first two fingers, if two are down
    pub fn pinch_distance(&self) -> Option<f64> {
        match self.touches.as_slice() {
            [(_, a), (_, b), ..] => Some(f64::from(a.distance(*b))),
            _ => None,
        }
    }
}

/// The rendered preview and everything needed to draw it
pub struct PreviewState {
    pub preview: Preview,
    pub texture: egui::TextureHandle,
    pub viewport: Viewport,
    pub touches: TouchTracker,
}

#[derive(Default)]
pub struct SelfDisplayState {
    pub manual_diagonal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_unit_rewrites_filled_fields() {
        let mut form = FormState {
            screen_width: "6.1".to_string(),
            screen_height: "".to_string(),
            device_width: "n/a".to_string(),
            device_height: "3.1".to_string(),
            ..Default::default()
        };

        form.change_unit(Unit::Millimeter);

        assert_eq!(form.unit, Unit::Millimeter);
        assert_eq!(form.screen_width, "155");
        assert_eq!(form.screen_height, "");
        assert_eq!(form.device_width, "n/a");
        assert_eq!(form.device_height, "79");
    }

    #[test]
    fn test_to_options() {
        let form = FormState {
            screen_width: "2.6".to_string(),
            mode: ModeChoice::Ppi,
            ppi: "460".to_string(),
            pattern: PatternChoice::Checkerboard,
            ..Default::default()
        };

        let options = form.to_options();
        assert_eq!(options.dimensions.screen_width, Some(2.6));
        assert_eq!(options.dimensions.device_width, None);
        assert_eq!(options.mode, InputMode::Ppi(Some(460.0)));
        assert_eq!(
            options.pattern,
            PatternKind::Checkerboard { tile_size: None }
        );
    }
}
