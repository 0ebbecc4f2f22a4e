use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use porthole_core::frame::{FrameSizeProvider, PixelSize};

/// Frame pixel size cell shared between the viewport panel (which writes the
/// laid-out size every pass) and the geometry engine (which reads it on
/// demand through [`FrameSizeProvider`]).
#[derive(Clone)]
pub struct SharedFrameSize(Arc<Mutex<PixelSize>>);

impl SharedFrameSize {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(PixelSize { w: 0.0, h: 0.0 })))
    }

    pub fn set(&self, size: PixelSize) {
        *self.0.lock().expect("frame size lock") = size;
    }
}

impl FrameSizeProvider for SharedFrameSize {
    fn frame_size_px(&self) -> PixelSize {
        *self.0.lock().expect("frame size lock")
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub image_path: Option<PathBuf>,

    /// Last value handed to the zoom control; kept in sync with the viewport
    /// after restores so the slider does not snap back.
    pub zoom_input: f64,

    /// Scratch text for the view description generate/import box.
    pub description_draft: String,

    /// Banner shown in the viewport when the current load failed.
    pub load_error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
