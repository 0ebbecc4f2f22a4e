use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use porthole_core::consts::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};

/// Viewer settings: the logical shape of the display frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub frame_width: f64,
    pub frame_height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: ViewerConfig =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        if config.frame_width <= 0.0 || config.frame_height <= 0.0 {
            anyhow::bail!("frame dimensions must be positive");
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
