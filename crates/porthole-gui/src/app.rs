use std::path::PathBuf;
use std::sync::mpsc;

use porthole_core::binding::ViewportBinding;
use porthole_core::viewport::Viewport;

use crate::config::ViewerConfig;
use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{SharedFrameSize, UIState};
use crate::worker;

pub struct PortholeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub binding: ViewportBinding,
    pub frame_size: SharedFrameSize,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub texture: Option<egui::TextureHandle>,
    pub show_about: bool,
}

impl PortholeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let config = ViewerConfig::default();
        let frame_size = SharedFrameSize::new();
        let binding = ViewportBinding::new(Viewport::new(
            config.frame_width,
            config.frame_height,
            Box::new(frame_size.clone()),
        ));

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            binding,
            frame_size,
            config,
            ui_state: UIState::default(),
            texture: None,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker and dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded {
                    generation,
                    path,
                    image,
                } => {
                    let (w, h) = (f64::from(image.width()), f64::from(image.height()));
                    match self.binding.image_decoded(generation, w, h) {
                        Ok(true) => {
                            let color_image = rgba_to_color_image(&image);
                            self.texture = Some(ctx.load_texture(
                                "viewport-image",
                                color_image,
                                egui::TextureOptions::LINEAR,
                            ));
                            self.ui_state.zoom_input = 0.0;
                            self.ui_state.load_error = None;
                            self.ui_state.add_log(format!(
                                "Loaded {} ({}x{})",
                                path.display(),
                                image.width(),
                                image.height()
                            ));
                        }
                        Ok(false) => {
                            self.ui_state
                                .add_log(format!("Ignored stale decode of {}", path.display()));
                        }
                        Err(e) => {
                            self.texture = None;
                            self.ui_state.load_error = Some("Could not read image".into());
                            self.ui_state.add_log(format!("ERROR: {e}"));
                        }
                    }
                }
                WorkerResult::DecodeFailed {
                    generation,
                    path,
                    message,
                } => {
                    if self.binding.decode_failed(generation) {
                        self.texture = None;
                        self.ui_state.load_error = Some("Could not read image".into());
                        self.ui_state.add_log(format!(
                            "ERROR: failed to decode {}: {message}",
                            path.display()
                        ));
                    }
                }
                WorkerResult::FilePicked { path } => self.open_image(path),
                WorkerResult::ViewLoaded { text } => {
                    self.ui_state.description_draft = text.clone();
                    self.import_description(&text);
                }
                WorkerResult::SettingsImported { config } => self.apply_config(config),
            }
        }
    }

    /// Kick off a load cycle for the picked file. The file path doubles as
    /// the opaque image identifier attached to saved views.
    pub fn open_image(&mut self, path: PathBuf) {
        let generation = self.binding.begin_load(path.display().to_string());
        self.texture = None;
        self.ui_state.load_error = None;
        self.ui_state.zoom_input = 0.0;
        self.ui_state.image_path = Some(path.clone());
        self.ui_state.add_log(format!("Loading {}...", path.display()));
        let _ = self.cmd_tx.send(WorkerCommand::Decode { path, generation });
    }

    /// Restore a view from description text, surfacing any rejection as a
    /// log message and leaving the viewport in its last valid state.
    pub fn import_description(&mut self, text: &str) {
        match self.binding.import_json(text) {
            Ok(()) => {
                self.ui_state.zoom_input = self.binding.viewport().zoom_value();
                self.ui_state.add_log("View restored from description".into());
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Rebuild the viewport for a new frame shape. A loaded image has to be
    /// reopened; its geometry belongs to the old frame.
    pub fn apply_config(&mut self, config: ViewerConfig) {
        self.config = config;
        self.binding = ViewportBinding::new(Viewport::new(
            config.frame_width,
            config.frame_height,
            Box::new(self.frame_size.clone()),
        ));
        self.texture = None;
        self.ui_state.image_path = None;
        self.ui_state.load_error = None;
        self.ui_state.zoom_input = 0.0;
        self.ui_state.add_log(format!(
            "Frame set to {}x{}",
            config.frame_width, config.frame_height
        ));
    }

    /// Back to the fitted view, syncing the zoom control.
    pub fn reset_view(&mut self) {
        if let Err(e) = self.binding.reset_view() {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        self.ui_state.zoom_input = 0.0;
    }
}

impl eframe::App for PortholeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Porthole")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Porthole");
                        ui.label("Image Viewport");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
