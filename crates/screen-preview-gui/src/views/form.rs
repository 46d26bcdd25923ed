use eframe::egui;
use screen_preview::{Calibration, DisplaySummary, SelfDisplay, Unit};

use super::state::{FormState, ModeChoice, PatternChoice, SelfDisplayState};
use crate::ui_components::{button_group, number_field};

/// Draw the input form. Returns true when "Generate Preview" was clicked.
pub fn show(ui: &mut egui::Ui, form: &mut FormState) -> bool {
    show_dimensions_section(ui, form);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    show_mode_section(ui, form);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    show_pattern_section(ui, form);
    ui.add_space(10.0);

    ui.vertical_centered_justified(|ui| ui.button("▶ Generate Preview").clicked())
        .inner
}

fn show_dimensions_section(ui: &mut egui::Ui, form: &mut FormState) {
    egui::CollapsingHeader::new("📏 Physical Size")
        .default_open(true)
        .show(ui, |ui| {
            let units = [
                (Unit::Inch, "Inches"),
                (Unit::Centimeter, "Centimeters"),
                (Unit::Millimeter, "Millimeters"),
            ];
            let mut selected = form.unit;
            if button_group(ui, &mut selected, &units) && selected != form.unit {
                form.change_unit(selected);
            }

            let suffix = form.unit.symbol();
            ui.add_space(5.0);
            ui.label("Screen (visible area):");
            number_field(ui, "Width:", &mut form.screen_width, suffix);
            number_field(ui, "Height:", &mut form.screen_height, suffix);

            ui.add_space(5.0);
            ui.label("Device (outer body):");
            number_field(ui, "Width:", &mut form.device_width, suffix);
            number_field(ui, "Height:", &mut form.device_height, suffix);
        });
}

fn show_mode_section(ui: &mut egui::Ui, form: &mut FormState) {
    egui::CollapsingHeader::new("🔢 Resolution")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.radio_value(&mut form.mode, ModeChoice::Resolution, "Resolution");
                ui.radio_value(&mut form.mode, ModeChoice::Ppi, "Pixel density");
            });

            match form.mode {
                ModeChoice::Resolution => {
                    number_field(ui, "Width:", &mut form.res_width, "px");
                    number_field(ui, "Height:", &mut form.res_height, "px");
                }
                ModeChoice::Ppi => {
                    number_field(ui, "Density:", &mut form.ppi, "PPI");
                }
            }
        });
}

fn show_pattern_section(ui: &mut egui::Ui, form: &mut FormState) {
    egui::CollapsingHeader::new("🎨 Test Pattern")
        .default_open(true)
        .show(ui, |ui| {
            let patterns = [
                (PatternChoice::Gradient, "Gradient"),
                (PatternChoice::Checkerboard, "Checkerboard"),
            ];
            button_group(ui, &mut form.pattern, &patterns);

            if form.pattern == PatternChoice::Checkerboard {
                number_field(ui, "Tile size:", &mut form.tile_size, "px");
                ui.label("(leave empty for automatic)");
            }
        });
}

/// The viewer's own screen, with an optional diagonal to calibrate it
pub fn show_self_display(ui: &mut egui::Ui, state: &mut SelfDisplayState, display: &SelfDisplay) {
    egui::CollapsingHeader::new("🖥 Your Display")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(format!(
                "{:.0} × {:.0} pixels ({:.0} PPI)",
                display.pixel_width, display.pixel_height, display.ppi
            ));
            ui.label(format!(
                "{:.1}\" × {:.1}\" ({:.1}\" diagonal)",
                display.width_in, display.height_in, display.diagonal_in
            ));

            number_field(ui, "Diagonal:", &mut state.manual_diagonal, "in");
            match display.calibration {
                Calibration::Estimated => {
                    ui.label("Estimated at 96 PPI. Enter your diagonal for true size.");
                }
                Calibration::ManualDiagonal => {
                    ui.label("Calibrated from your diagonal.");
                }
            }
        });
}

pub fn show_summary(ui: &mut egui::Ui, summary: &DisplaySummary) {
    egui::CollapsingHeader::new("📊 Display Information")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("display_summary")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in summary.lines() {
                        ui.strong(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
}
