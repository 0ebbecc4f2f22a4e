/// Display pixels the image moves per discrete pan nudge.
pub const PAN_STEP_PX: f64 = 10.0;

/// Upper bound of the zoom control's input range. An input of this value
/// yields a scale one full unit above the minimum.
pub const ZOOM_INPUT_MAX: f64 = 100.0;

/// Default logical frame width.
pub const DEFAULT_FRAME_WIDTH: f64 = 15.0;

/// Default logical frame height.
pub const DEFAULT_FRAME_HEIGHT: f64 = 10.0;
