use std::path::PathBuf;

use image::RgbaImage;

use crate::config::ViewerConfig;

/// Commands sent from the UI thread to the decode worker.
pub enum WorkerCommand {
    /// Decode an image file and report its pixels + natural dimensions.
    Decode { path: PathBuf, generation: u64 },
}

/// Results sent back to the UI thread — decode outcomes from the worker, plus
/// picks forwarded by the file-dialog threads. Decode outcomes carry the
/// generation of the load cycle they answer; the binding drops stale ones.
pub enum WorkerResult {
    Decoded {
        generation: u64,
        path: PathBuf,
        image: RgbaImage,
    },
    DecodeFailed {
        generation: u64,
        path: PathBuf,
        message: String,
    },

    /// An image file was picked in the Open dialog.
    FilePicked { path: PathBuf },

    /// A view description file was read for import.
    ViewLoaded { text: String },

    /// Viewer settings were imported.
    SettingsImported { config: ViewerConfig },
}
