use eframe::egui;
use screen_preview::{SelfDisplay, Viewport, estimate_self_display, generate_preview};

use crate::logger::AppLogger;
use crate::ui_components::{level_color, parse_decimal};
use crate::views::{
    FormState, PreviewState, SelfDisplayState, TouchTracker, form, load_texture, show_preview,
    show_self_display, show_summary,
};

/// Used until the windowing backend reports the monitor size
const FALLBACK_MONITOR_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

pub struct ScreenPreviewApp {
    form: FormState,
    self_display: SelfDisplayState,
    preview: Option<PreviewState>,

    // Validation message shown in a blocking modal
    alert: Option<String>,

    logger: AppLogger,
    show_log: bool,
}

impl ScreenPreviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        log::info!("Screen Preview ready");
        Self {
            form: FormState::default(),
            self_display: SelfDisplayState::default(),
            preview: None,
            alert: None,
            logger,
            show_log: false,
        }
    }

    fn current_display(&self, ctx: &egui::Context) -> SelfDisplay {
        let monitor = ctx
            .input(|i| i.viewport().monitor_size)
            .unwrap_or(FALLBACK_MONITOR_SIZE);
        estimate_self_display(
            f64::from(monitor.x),
            f64::from(monitor.y),
            f64::from(ctx.pixels_per_point()),
            parse_decimal(&self.self_display.manual_diagonal),
        )
    }

    /// A failed generation leaves the previous preview on screen
    fn generate(&mut self, ctx: &egui::Context) {
        match generate_preview(&self.form.to_options()) {
            Ok(preview) => {
                let texture = load_texture(ctx, &preview);
                self.preview = Some(PreviewState {
                    preview,
                    texture,
                    viewport: Viewport::new(),
                    touches: TouchTracker::default(),
                });
            }
            Err(e) => {
                log::warn!("Preview not generated: {e}");
                self.alert = Some(e.to_string());
            }
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_log, "📋 Log");
                if let Some(entry) = self.logger.latest() {
                    let mut text = egui::RichText::new(&entry.message);
                    if entry.needs_attention() {
                        let color = level_color(ui, entry.level);
                        text = text.color(color).strong();
                    }
                    ui.label(text);
                }
            });
        });

        if !self.show_log {
            return;
        }

        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(150.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Log");
                    if ui.button("Clear").clicked() {
                        self.logger.clear();
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            let line = format!(
                                "{} {:<5} [{}] {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.source.label(),
                                entry.message
                            );
                            let color = level_color(ui, entry.level);
                            ui.label(egui::RichText::new(line).monospace().color(color));
                        }
                    });
            });
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.alert else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("validation_alert")).show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.heading("Cannot generate preview");
            ui.add_space(8.0);
            ui.label(message.as_str());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
        });

        if response.inner || response.should_close() {
            self.alert = None;
        }
    }
}

impl eframe::App for ScreenPreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let display = self.current_display(ctx);

        self.show_status_bar(ctx);

        let mut generate = false;
        egui::SidePanel::left("controls")
            .resizable(true)
            .min_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Screen Preview");
                    ui.add_space(10.0);

                    generate = form::show(ui, &mut self.form);

                    ui.add_space(10.0);
                    ui.separator();
                    show_self_display(ui, &mut self.self_display, &display);

                    if let Some(state) = &self.preview {
                        ui.separator();
                        show_summary(ui, &state.preview.summary);
                    }
                });
            });

        if generate {
            self.generate(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            show_preview(ui, &mut self.preview, display.points_per_inch());
        });

        self.show_alert(ctx);
    }
}
