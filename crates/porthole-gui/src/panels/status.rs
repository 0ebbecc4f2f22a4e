use crate::app::PortholeApp;

pub fn show(ctx: &egui::Context, app: &mut PortholeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let vp = app.binding.viewport();
            if let Some((w, h)) = vp.image_size() {
                ui.label(format!("{}x{}", w, h));
                ui.separator();
                ui.label(format!("Scale: {:.3}", vp.scale()));
                ui.separator();
                let (x, y) = vp.offset();
                ui.label(format!("Offset: ({:.1}, {:.1})", x, y));
            } else {
                ui.label("No image");
            }
            ui.separator();
            ui.label(format!(
                "Frame: {}x{}",
                app.config.frame_width, app.config.frame_height
            ));
        });

        ui.add_space(2.0);
    });
}
