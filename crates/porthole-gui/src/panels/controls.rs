use porthole_core::binding::PanDirection;

use crate::app::PortholeApp;
use crate::messages::WorkerResult;

const PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut PortholeApp) {
    egui::SidePanel::left("controls")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                pan_section(ui, app);
                ui.separator();
                zoom_section(ui, app);
                ui.separator();
                description_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut PortholeApp) {
    let status = if app.binding.is_interactive() {
        Some("Loaded")
    } else if app.ui_state.image_path.is_some() && app.ui_state.load_error.is_none() {
        Some("Loading...")
    } else {
        None
    };
    super::section_header(ui, "Image", status);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        let result_tx = app.result_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["jpg", "jpeg", "png", "gif"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                let _ = result_tx.send(WorkerResult::FilePicked { path });
            }
        });
    }

    if let Some(ref path) = app.ui_state.image_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if let Some((w, h)) = app.binding.viewport().image_size() {
        ui.small(format!("{}x{} px", w, h));
    }
}

fn pan_section(ui: &mut egui::Ui, app: &mut PortholeApp) {
    super::section_header(ui, "Pan", None);
    ui.add_space(4.0);

    let interactive = app.binding.is_interactive();
    let mut intent: Option<PanDirection> = None;

    ui.add_enabled_ui(interactive, |ui| {
        ui.horizontal(|ui| {
            if ui.button("\u{2190}").clicked() {
                intent = Some(PanDirection::Left);
            }
            if ui.button("\u{2192}").clicked() {
                intent = Some(PanDirection::Right);
            }
            if ui.button("\u{2191}").clicked() {
                intent = Some(PanDirection::Up);
            }
            if ui.button("\u{2193}").clicked() {
                intent = Some(PanDirection::Down);
            }
        });
    });

    if let Some(direction) = intent {
        if let Err(e) = app.binding.nudge(direction) {
            app.ui_state.add_log(format!("ERROR: {e}"));
        }
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut PortholeApp) {
    super::section_header(ui, "Zoom", None);
    ui.add_space(4.0);

    let interactive = app.binding.is_interactive();
    let mut value = app.ui_state.zoom_input;
    let mut changed = false;

    ui.add_enabled_ui(interactive, |ui| {
        let response = ui.add(
            egui::Slider::new(&mut value, 0.0..=100.0)
                .text("Scale")
                .clamping(egui::SliderClamping::Always),
        );
        changed = response.changed();
    });

    if changed {
        app.ui_state.zoom_input = value;
        if let Err(e) = app.binding.set_zoom(value) {
            app.ui_state.add_log(format!("ERROR: {e}"));
        }
    }
}

fn description_section(ui: &mut egui::Ui, app: &mut PortholeApp) {
    super::section_header(ui, "View Description", None);
    ui.add_space(4.0);

    let interactive = app.binding.is_interactive();
    let mut generate = false;
    let mut import = false;

    ui.add_enabled_ui(interactive, |ui| {
        generate = ui.button("Generate").clicked();

        ui.add(
            egui::TextEdit::multiline(&mut app.ui_state.description_draft)
                .desired_rows(4)
                .font(egui::TextStyle::Monospace)
                .hint_text("Paste a view description here"),
        );

        import = ui.button("Import").clicked();
    });

    if generate {
        match app.binding.export_json() {
            Ok(text) => {
                app.ui_state.description_draft = text;
                app.ui_state.add_log("Description generated".into());
            }
            Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
        }
    }
    if import {
        let text = app.ui_state.description_draft.clone();
        app.import_description(&text);
    }
}
