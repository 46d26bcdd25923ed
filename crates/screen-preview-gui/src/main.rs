#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;
mod ui_components;
mod views;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES);
    if let Err(e) = logger.clone().install() {
        eprintln!("Logging disabled: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Screen Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "Screen Preview",
        options,
        Box::new(|cc| Ok(Box::new(app::ScreenPreviewApp::new(cc, logger)))),
    )
}
