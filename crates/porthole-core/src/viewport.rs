use tracing::debug;

use crate::consts::ZOOM_INPUT_MAX;
use crate::description::ViewDescription;
use crate::error::{PortholeError, Result};
use crate::frame::{FrameSizeProvider, PixelSize, Placement};

/// Viewport geometry state: which part of the image the frame shows.
///
/// The frame's logical dimensions are fixed for the viewport's lifetime; its
/// rendered pixel size is read through the injected [`FrameSizeProvider`].
/// Offsets are display pixels, relative to the frame's top-left. While an
/// image is loaded the frame is always fully covered: `scale >= min_scale`
/// and both offsets stay within the range that keeps image under every frame
/// pixel.
pub struct Viewport {
    frame_width: f64,
    frame_height: f64,
    frame_aspect: f64,
    image_width: f64,
    image_height: f64,
    scale: f64,
    min_scale: f64,
    offset_x: f64,
    offset_y: f64,
    loaded: bool,
    frame_px: Box<dyn FrameSizeProvider>,
}

impl Viewport {
    pub fn new(frame_width: f64, frame_height: f64, frame_px: Box<dyn FrameSizeProvider>) -> Self {
        debug_assert!(frame_width > 0.0 && frame_height > 0.0);
        Self {
            frame_width,
            frame_height,
            frame_aspect: frame_width / frame_height,
            image_width: 0.0,
            image_height: 0.0,
            scale: 1.0,
            min_scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            loaded: false,
            frame_px,
        }
    }

    /// Discard the current image's geometry. Called when a new image begins
    /// loading, before its natural dimensions are known.
    pub fn reset(&mut self) {
        self.image_width = 0.0;
        self.image_height = 0.0;
        self.scale = 1.0;
        self.min_scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.loaded = false;
    }

    /// Fit a freshly decoded image: the smallest scale that still covers the
    /// whole frame, anchored at the image's top-left.
    pub fn fit(&mut self, image_width: f64, image_height: f64) -> Result<()> {
        if image_width <= 0.0 || image_height <= 0.0 {
            return Err(PortholeError::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }
        let px = self.frame_px.frame_size_px();
        if px.w <= 0.0 || px.h <= 0.0 {
            return Err(PortholeError::EmptyFrame);
        }

        self.image_width = image_width;
        self.image_height = image_height;
        self.min_scale = self.coverage_scale(image_width, image_height, px);
        self.scale = self.min_scale;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.loaded = true;

        debug!(
            image_width,
            image_height,
            min_scale = self.min_scale,
            "fitted image"
        );
        Ok(())
    }

    /// Move the image. With `relative`, `(dx, dy)` is a delta from the
    /// current offset; otherwise an absolute target. Either way the result is
    /// clamped per axis so the frame stays fully covered.
    pub fn pan(&mut self, dx: f64, dy: f64, relative: bool) -> Result<()> {
        if !self.loaded {
            return Err(PortholeError::NotLoaded);
        }
        let px = self.frame_px.frame_size_px();
        let (x, y) = if relative {
            (self.offset_x + dx, self.offset_y + dy)
        } else {
            (dx, dy)
        };
        self.offset_x = clamp_axis(x, px.w, self.image_width * self.scale);
        self.offset_y = clamp_axis(y, px.h, self.image_height * self.scale);
        Ok(())
    }

    /// Set the zoom from a control value in `[0, 100]`.
    ///
    /// The scale is an additive offset above the minimum, so 0 always means
    /// "fitted" whatever the image size. The offset is rescaled about the
    /// frame's center so the zoom stays visually anchored there, then clamped
    /// like an absolute pan.
    pub fn zoom(&mut self, value: f64) -> Result<()> {
        if !self.loaded {
            return Err(PortholeError::NotLoaded);
        }
        let value = value.clamp(0.0, ZOOM_INPUT_MAX);
        let px = self.frame_px.frame_size_px();

        let old_scale = self.scale;
        self.scale = self.min_scale + value / ZOOM_INPUT_MAX;

        let k = self.scale / old_scale;
        let cx = px.w * 0.5;
        let cy = px.h * 0.5;
        let x = k * (self.offset_x - cx) + cx;
        let y = k * (self.offset_y - cy) + cy;
        self.pan(x, y, false)
    }

    /// Control value corresponding to the current scale, for control readback
    /// after a restore.
    pub fn zoom_value(&self) -> f64 {
        ((self.scale - self.min_scale) * ZOOM_INPUT_MAX).clamp(0.0, ZOOM_INPUT_MAX)
    }

    /// Snapshot of the current view for later exact reproduction.
    pub fn describe(&self) -> Result<ViewDescription> {
        if !self.loaded {
            return Err(PortholeError::NotLoaded);
        }
        Ok(ViewDescription {
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            image_width: self.image_width,
            image_height: self.image_height,
            scale: self.scale,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        })
    }

    /// Replace the whole state from a previously captured description.
    ///
    /// Scale and offset are trusted verbatim (no re-fit), so a saved view is
    /// reproduced exactly even when it differs from the natural fitted view.
    /// The record must target a frame of the same shape; on any error the
    /// state is left untouched. `min_scale` is not part of the record — it is
    /// derived state and is recomputed from the restored dimensions.
    pub fn restore(&mut self, desc: &ViewDescription) -> Result<()> {
        desc.validate()?;
        if desc.frame_width != self.frame_width || desc.frame_height != self.frame_height {
            return Err(PortholeError::FrameMismatch {
                expected_width: self.frame_width,
                expected_height: self.frame_height,
                found_width: desc.frame_width,
                found_height: desc.frame_height,
            });
        }
        let px = self.frame_px.frame_size_px();

        self.image_width = desc.image_width;
        self.image_height = desc.image_height;
        self.scale = desc.scale;
        self.offset_x = desc.offset_x;
        self.offset_y = desc.offset_y;
        self.min_scale = self.coverage_scale(desc.image_width, desc.image_height, px);
        self.loaded = true;

        debug!(scale = self.scale, "restored view");
        Ok(())
    }

    /// Rectangle the rendering surface should draw the image into, or `None`
    /// before an image is fitted.
    pub fn placement(&self) -> Option<Placement> {
        if !self.loaded {
            return None;
        }
        Some(Placement {
            x: self.offset_x,
            y: self.offset_y,
            w: self.image_width * self.scale,
            h: self.image_height * self.scale,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Logical frame dimensions, fixed at construction.
    pub fn frame_size(&self) -> (f64, f64) {
        (self.frame_width, self.frame_height)
    }

    pub fn image_size(&self) -> Option<(f64, f64)> {
        self.loaded.then_some((self.image_width, self.image_height))
    }

    /// Smallest scale at which an image of the given dimensions covers the
    /// whole frame. An image relatively wider than the frame runs out of
    /// height first, so coverage is bounded by height; otherwise by width.
    fn coverage_scale(&self, image_width: f64, image_height: f64, px: PixelSize) -> f64 {
        let image_aspect = image_width / image_height;
        if image_aspect > self.frame_aspect {
            px.h / image_height
        } else {
            px.w / image_width
        }
    }
}

/// Clamp one offset axis: the image's leading edge may not move past the
/// frame's, and its trailing edge may not pull inside the frame's far edge.
fn clamp_axis(v: f64, frame_px: f64, scaled_extent: f64) -> f64 {
    if v > 0.0 {
        0.0
    } else {
        v.max(frame_px - scaled_extent)
    }
}
