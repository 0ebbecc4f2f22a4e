use porthole_core::frame::PixelSize;

use crate::app::PortholeApp;

pub fn show(ctx: &egui::Context, app: &mut PortholeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_rect_before_wrap();
        paint_background(ui, avail);

        let frame_rect = frame_rect(avail, app.config.frame_width / app.config.frame_height);

        // The rendered size the geometry engine reads back through its
        // provider. Must be written before any intent handled this pass.
        app.frame_size.set(PixelSize {
            w: f64::from(frame_rect.width()),
            h: f64::from(frame_rect.height()),
        });

        let response = ui.allocate_rect(frame_rect, egui::Sense::click());
        if response.double_clicked() {
            app.reset_view();
        }

        match (&app.texture, app.binding.viewport().placement()) {
            (Some(texture), Some(placement)) => {
                let img_rect = egui::Rect::from_min_size(
                    frame_rect.min
                        + egui::vec2(placement.x as f32, placement.y as f32),
                    egui::vec2(placement.w as f32, placement.h as f32),
                );
                let painter = ui.painter().with_clip_rect(frame_rect);
                painter.image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            _ => show_placeholder(ui, frame_rect, app),
        }

        draw_frame_outline(ui, frame_rect);
    });
}

/// Largest rect of the configured aspect that fits the available space,
/// anchored top-left. Width fills the panel, height follows the aspect ratio.
fn frame_rect(avail: egui::Rect, aspect: f64) -> egui::Rect {
    let aspect = aspect as f32;
    let mut w = avail.width();
    let mut h = w / aspect;
    if h > avail.height() {
        h = avail.height();
        w = h * aspect;
    }
    egui::Rect::from_min_size(avail.min, egui::vec2(w, h))
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_frame_outline(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
        egui::StrokeKind::Inside,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, app: &PortholeApp) {
    let (text, color) = match &app.ui_state.load_error {
        Some(message) => (message.as_str(), egui::Color32::from_rgb(200, 80, 80)),
        None if app.ui_state.image_path.is_some() => ("Decoding...", egui::Color32::from_gray(100)),
        None => ("Open an image to begin", egui::Color32::from_gray(100)),
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        color,
    );
}
