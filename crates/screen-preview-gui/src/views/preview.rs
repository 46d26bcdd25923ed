use eframe::egui;
use image::imageops::FilterType;
use screen_preview::{ImageFit, Preview, PreviewLayout, ViewportEvent};
use std::borrow::Cow;

use super::state::PreviewState;

const DEVICE_FILL: egui::Color32 = egui::Color32::from_gray(30);
const DEVICE_STROKE: egui::Color32 = egui::Color32::from_gray(90);
const DEVICE_CORNER_RADIUS: f32 = 12.0;

/// Upload a rendered pattern, downscaling it if the GPU can't hold it
pub fn load_texture(ctx: &egui::Context, preview: &Preview) -> egui::TextureHandle {
    let max_side = ctx.input(|i| i.max_texture_side) as u32;
    let pattern = &preview.pattern;

    let image = if pattern.width() > max_side || pattern.height() > max_side {
        let scale = f64::from(max_side) / f64::from(pattern.width().max(pattern.height()));
        let width = ((f64::from(pattern.width()) * scale) as u32).max(1);
        let height = ((f64::from(pattern.height()) * scale) as u32).max(1);
        log::info!(
            "Pattern exceeds {max_side}px texture limit, showing it at {width} × {height}"
        );
        Cow::Owned(image::imageops::resize(
            pattern,
            width,
            height,
            FilterType::Triangle,
        ))
    } else {
        Cow::Borrowed(pattern)
    };

    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    );
    let options = match preview.fit {
        ImageFit::Stretch => egui::TextureOptions::NEAREST,
        ImageFit::Cover => egui::TextureOptions::LINEAR,
    };
    ctx.load_texture("screen_pattern", color_image, options)
}

pub fn show_preview(ui: &mut egui::Ui, preview: &mut Option<PreviewState>, points_per_inch: f64) {
    let Some(state) = preview else {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.heading("No Preview");
                ui.label("Enter the screen dimensions and click 'Generate Preview'");
            });
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!(
            "Zoom: {:.0}%",
            state.viewport.state().scale * 100.0
        ));
        if ui.button("Reset view").clicked() {
            state.viewport.handle(ViewportEvent::Reset);
        }
        ui.label("Drag to pan, scroll or pinch to zoom");
    });
    ui.separator();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
    handle_pointer(ui, &response, state);
    handle_touches(ui, &response, state);
    paint(&ui.painter_at(rect), rect, state, points_per_inch);
}

/// Position relative to the preview container
fn local(rect: egui::Rect, pos: egui::Pos2) -> (f64, f64) {
    (f64::from(pos.x - rect.min.x), f64::from(pos.y - rect.min.y))
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, state: &mut PreviewState) {
    let viewport = &mut state.viewport;

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = local(response.rect, pos);
            viewport.handle(ViewportEvent::PointerDown { x, y });
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = local(response.rect, pos);
            viewport.handle(ViewportEvent::PointerMove { x, y });
        }
    }
    if response.drag_stopped() {
        viewport.handle(ViewportEvent::PointerUp);
    }

    if response.hovered() {
        // egui reports wheel-up as positive; the viewport expects it negative
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            viewport.handle(ViewportEvent::Wheel {
                delta_y: -f64::from(scroll),
            });
        }
    }
}

fn handle_touches(ui: &egui::Ui, response: &egui::Response, state: &mut PreviewState) {
    let events = ui.input(|i| i.events.clone());

    for event in events {
        let egui::Event::Touch { id, phase, pos, .. } = event else {
            continue;
        };

        let was_pinching = state.touches.pinch_distance().is_some();
        let touches = &mut state.touches.touches;
        let existing = touches.iter().position(|(touch_id, _)| *touch_id == id);

        match phase {
            egui::TouchPhase::Start => {
                if response.rect.contains(pos) && existing.is_none() {
                    touches.push((id, pos));
                }
            }
            egui::TouchPhase::Move => {
                if let Some(index) = existing {
                    touches[index].1 = pos;
                }
            }
            egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                if let Some(index) = existing {
                    touches.remove(index);
                }
            }
        }

        match (was_pinching, state.touches.pinch_distance()) {
            (false, Some(distance)) => state
                .viewport
                .handle(ViewportEvent::PinchStart { distance }),
            (true, Some(distance)) => state.viewport.handle(ViewportEvent::PinchMove { distance }),
            (true, None) => state.viewport.handle(ViewportEvent::PinchEnd),
            (false, None) => {}
        }
    }
}

fn paint(painter: &egui::Painter, rect: egui::Rect, state: &PreviewState, points_per_inch: f64) {
    let layout = PreviewLayout::new(&state.preview.spec, points_per_inch);
    let view = state.viewport.state();
    let center = (f64::from(rect.center().x), f64::from(rect.center().y));

    // Centered at true size, then translated and scaled around the container center
    let placed = |(w, h): (f64, f64)| {
        let min = view.transform_point((center.0 - w / 2.0, center.1 - h / 2.0), center);
        let max = view.transform_point((center.0 + w / 2.0, center.1 + h / 2.0), center);
        egui::Rect::from_min_max(
            egui::pos2(min.0 as f32, min.1 as f32),
            egui::pos2(max.0 as f32, max.1 as f32),
        )
    };
    let device_rect = placed(layout.device_size);
    let screen_rect = placed(layout.screen_size);

    let radius = DEVICE_CORNER_RADIUS * view.scale as f32;
    painter.rect_filled(device_rect, radius, DEVICE_FILL);
    painter.rect_stroke(
        device_rect,
        radius,
        egui::Stroke::new(2.0, DEVICE_STROKE),
        egui::StrokeKind::Outside,
    );

    let pattern = &state.preview.pattern;
    let [u0, v0, u1, v1] = state.preview.fit.uv_rect(
        (f64::from(pattern.width()), f64::from(pattern.height())),
        layout.screen_size,
    );
    painter.image(
        state.texture.id(),
        screen_rect,
        egui::Rect::from_min_max(
            egui::pos2(u0 as f32, v0 as f32),
            egui::pos2(u1 as f32, v1 as f32),
        ),
        egui::Color32::WHITE,
    );
}
