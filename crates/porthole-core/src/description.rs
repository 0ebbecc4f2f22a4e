use serde::{Deserialize, Serialize};

use crate::error::{PortholeError, Result};

/// Flat snapshot of a viewport's geometry — field-for-field what
/// [`crate::viewport::Viewport::restore`] needs to reproduce a view exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewDescription {
    pub frame_width: f64,
    pub frame_height: f64,
    pub image_width: f64,
    pub image_height: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewDescription {
    /// Reject records no valid viewport state could have produced.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            self.frame_width,
            self.frame_height,
            self.image_width,
            self.image_height,
            self.scale,
            self.offset_x,
            self.offset_y,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(PortholeError::MalformedDescription(
                "non-finite field".into(),
            ));
        }
        if self.frame_width <= 0.0
            || self.frame_height <= 0.0
            || self.image_width <= 0.0
            || self.image_height <= 0.0
            || self.scale <= 0.0
        {
            return Err(PortholeError::MalformedDescription(
                "dimensions and scale must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// A view description plus the identifier of the image it was saved for.
/// This is the record that crosses the save/restore channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedView {
    pub image_id: String,
    pub view: ViewDescription,
}

impl SavedView {
    /// Serialize to the wire text form. Lossless for every field.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PortholeError::MalformedDescription(e.to_string()))
    }

    /// Parse the wire text form, rejecting anything that is not a well-formed
    /// record of the expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        let saved: SavedView = serde_json::from_str(text)
            .map_err(|e| PortholeError::MalformedDescription(e.to_string()))?;
        saved.view.validate()?;
        Ok(saved)
    }
}
