use crate::angle::Angle;
use crate::error::ScreenError;
use crate::points::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Primary state of a [`Screen`](crate::Screen): everything else is derived.
///
/// This is the form a view is persisted in and the scratch state handed to
/// [`Screen::edit`](crate::Screen::edit).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenParams {
    /// Viewport in pixel space
    pub pixel_rect: Rect,
    /// Global units per pixel
    pub scale: f64,
    /// Rotation of the global axes relative to the pixel axes
    pub angle: Angle,
    /// Global point shown at the viewport center
    pub org: Point,
}

impl ScreenParams {
    /// Check the invariants the derived matrices rely on.
    pub fn validate(&self) -> Result<(), ScreenError> {
        if !self.pixel_rect.has_area() {
            return Err(ScreenError::degenerate(format!(
                "pixel rect must have positive finite size, got {:?}",
                self.pixel_rect
            )));
        }
        if !self.pixel_rect.min.is_finite() {
            return Err(ScreenError::degenerate("pixel rect origin must be finite"));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ScreenError::degenerate(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if !self.angle.val().is_finite() {
            return Err(ScreenError::degenerate("angle must be finite"));
        }
        if !self.org.is_finite() {
            return Err(ScreenError::degenerate(format!(
                "origin must be finite, got {:?}",
                self.org
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ScreenError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ScreenError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
