/// Rendered pixel size of the display frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSize {
    pub w: f64,
    pub h: f64,
}

/// Source of the frame's current rendered pixel size.
///
/// The rendered size depends on window layout and can change between calls,
/// so the geometry engine queries it on demand instead of caching it.
pub trait FrameSizeProvider {
    fn frame_size_px(&self) -> PixelSize;
}

/// Provider returning a constant size, for headless use and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedFrameSize(pub PixelSize);

impl FrameSizeProvider for FixedFrameSize {
    fn frame_size_px(&self) -> PixelSize {
        self.0
    }
}

/// Position and size of the scaled image relative to the frame's top-left,
/// in display pixels. What a rendering surface draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}
