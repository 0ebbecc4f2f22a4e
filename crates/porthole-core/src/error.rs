use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortholeError {
    #[error("no image loaded")]
    NotLoaded,

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("display frame has no rendered size")]
    EmptyFrame,

    #[error(
        "description targets a {found_width}x{found_height} frame, this viewport's frame is {expected_width}x{expected_height}"
    )]
    FrameMismatch {
        expected_width: f64,
        expected_height: f64,
        found_width: f64,
        found_height: f64,
    },

    #[error("malformed view description: {0}")]
    MalformedDescription(String),

    #[error("description was saved for image '{description}', the loaded image is '{loaded}'")]
    IdentityMismatch { description: String, loaded: String },

    #[error("image decode failed: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, PortholeError>;
