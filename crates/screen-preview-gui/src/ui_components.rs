use eframe::egui;

/// Horizontal button group for enum selection
pub fn button_group<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        for (option_value, option_text) in options {
            if ui
                .selectable_value(value, option_value.clone(), *option_text)
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

/// Labelled single-line number entry backed by the raw text the user typed
pub fn number_field(ui: &mut egui::Ui, label: &str, text: &mut String, suffix: &str) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let changed = ui
            .add(egui::TextEdit::singleline(text).desired_width(80.0))
            .changed();
        if !suffix.is_empty() {
            ui.label(suffix);
        }
        changed
    })
    .inner
}

/// Text color for a log line of `level`
pub fn level_color(ui: &egui::Ui, level: log::Level) -> egui::Color32 {
    let visuals = ui.visuals();
    match level {
        log::Level::Error => visuals.error_fg_color,
        log::Level::Warn => visuals.warn_fg_color,
        log::Level::Info => visuals.text_color(),
        log::Level::Debug | log::Level::Trace => visuals.weak_text_color(),
    }
}

/// Parse a length/PPI field; empty or non-numeric text is `None`
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse a pixel count, dropping any fractional part
pub fn parse_pixels(text: &str) -> Option<u32> {
    parse_decimal(text)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u32)
}

/// Format a number for writing back into a text field
pub fn format_decimal(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
