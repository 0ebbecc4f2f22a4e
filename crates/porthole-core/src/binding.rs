use tracing::{debug, warn};

use crate::consts::PAN_STEP_PX;
use crate::description::SavedView;
use crate::error::{PortholeError, Result};
use crate::viewport::Viewport;

/// One of the four discrete pan controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Offset delta for a single nudge, in display pixels.
    fn delta(self) -> (f64, f64) {
        match self {
            PanDirection::Left => (-PAN_STEP_PX, 0.0),
            PanDirection::Right => (PAN_STEP_PX, 0.0),
            PanDirection::Up => (0.0, -PAN_STEP_PX),
            PanDirection::Down => (0.0, PAN_STEP_PX),
        }
    }
}

/// Adapter between the user controls / image source and the [`Viewport`].
///
/// Owns the viewport exclusively. Load cycles are numbered: a decode result
/// carrying an older generation than the latest `begin_load` is ignored, so a
/// slow decode can never clobber the view of an image opened after it.
pub struct ViewportBinding {
    viewport: Viewport,
    generation: u64,
    image_id: Option<String>,
    interactive: bool,
}

impl ViewportBinding {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            generation: 0,
            image_id: None,
            interactive: false,
        }
    }

    /// Start a new load cycle: discard current geometry, disable the
    /// controls, and hand back the generation token the decode result must
    /// echo.
    pub fn begin_load(&mut self, image_id: impl Into<String>) -> u64 {
        self.generation += 1;
        self.image_id = Some(image_id.into());
        self.viewport.reset();
        self.interactive = false;
        debug!(generation = self.generation, "load started");
        self.generation
    }

    /// Natural dimensions resolved for the given load cycle.
    ///
    /// Returns `Ok(false)` when the result is stale — a newer load has
    /// started since — leaving the state untouched. On invalid dimensions the
    /// viewport stays reset and the error propagates for the shell to
    /// surface.
    pub fn image_decoded(&mut self, generation: u64, width: f64, height: f64) -> Result<bool> {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "stale decode result ignored"
            );
            return Ok(false);
        }
        match self.viewport.fit(width, height) {
            Ok(()) => {
                self.interactive = true;
                Ok(true)
            }
            Err(e) => {
                self.viewport.reset();
                self.interactive = false;
                Err(e)
            }
        }
    }

    /// Decode failure for the given load cycle. Returns `false` when stale.
    pub fn decode_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        warn!(generation, "image decode failed");
        self.viewport.reset();
        self.interactive = false;
        true
    }

    /// One discrete pan nudge.
    pub fn nudge(&mut self, direction: PanDirection) -> Result<()> {
        let (dx, dy) = direction.delta();
        self.viewport.pan(dx, dy, true)
    }

    /// Forward a zoom control reading in `[0, 100]`.
    pub fn set_zoom(&mut self, value: f64) -> Result<()> {
        self.viewport.zoom(value)
    }

    /// Back to the fitted home view: minimum scale, image top-left flush
    /// with the frame's.
    pub fn reset_view(&mut self) -> Result<()> {
        self.viewport.zoom(0.0)?;
        self.viewport.pan(0.0, 0.0, false)
    }

    /// Capture the current view, tagged with the loaded image's identifier.
    pub fn export_view(&self) -> Result<SavedView> {
        let image_id = self.current_image_id()?;
        Ok(SavedView {
            image_id,
            view: self.viewport.describe()?,
        })
    }

    pub fn export_json(&self) -> Result<String> {
        self.export_view()?.to_json()
    }

    /// Restore a saved view. The record must have been saved for the image
    /// currently loaded; a wrong image is reported distinctly from a wrong
    /// frame shape.
    pub fn import_view(&mut self, saved: &SavedView) -> Result<()> {
        let current = self.current_image_id()?;
        if saved.image_id != current {
            return Err(PortholeError::IdentityMismatch {
                description: saved.image_id.clone(),
                loaded: current,
            });
        }
        self.viewport.restore(&saved.view)
    }

    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let saved = SavedView::from_json(text)?;
        self.import_view(&saved)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn current_image_id(&self) -> Result<String> {
        if !self.interactive {
            return Err(PortholeError::NotLoaded);
        }
        self.image_id.clone().ok_or(PortholeError::NotLoaded)
    }
}
