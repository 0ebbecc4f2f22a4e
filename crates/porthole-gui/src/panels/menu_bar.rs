use crate::app::PortholeApp;
use crate::config::ViewerConfig;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut PortholeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Image...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                let interactive = app.binding.is_interactive();
                ui.add_enabled_ui(interactive, |ui| {
                    if ui.button("Import View...").clicked() {
                        ui.close();
                        import_view(app);
                    }
                    if ui.button("Export View...").clicked() {
                        ui.close();
                        export_view(app);
                    }
                });

                ui.separator();

                if ui.button("Import Settings...").clicked() {
                    ui.close();
                    import_settings(app);
                }
                if ui.button("Export Settings...").clicked() {
                    ui.close();
                    export_settings(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                ui.add_enabled_ui(app.binding.is_interactive(), |ui| {
                    if ui.button("Reset View").clicked() {
                        ui.close();
                        app.reset_view();
                    }
                });
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_image(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_image(app: &mut PortholeApp) {
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

fn import_view(app: &mut PortholeApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let text = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
            .and_then(|path| std::fs::read_to_string(&path).ok());
        if let Some(text) = text {
            let _ = result_tx.send(WorkerResult::ViewLoaded { text });
        }
    });
}

fn export_view(app: &mut PortholeApp) {
    let json = match app.binding.export_json() {
        Ok(j) => j,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
    };
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("view.json")
            .save_file()
        {
            if let Err(e) = std::fs::write(&path, json) {
                tracing::warn!("failed to write view description: {e}");
            }
        }
    });
}

fn import_settings(app: &mut PortholeApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let config = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
            .and_then(|path| ViewerConfig::load(&path).ok());
        if let Some(config) = config {
            let _ = result_tx.send(WorkerResult::SettingsImported { config });
        }
    });
}

fn export_settings(app: &mut PortholeApp) {
    let config = app.config;
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("porthole.toml")
            .save_file()
        {
            if let Err(e) = config.save(&path) {
                tracing::warn!("failed to write settings: {e}");
            }
        }
    });
}
