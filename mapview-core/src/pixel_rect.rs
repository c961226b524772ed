use crate::points::Rect;
use serde::{Deserialize, Serialize};

/// Viewport rectangle in integer pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero width or zero height
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Real-valued rectangle from (x, y) to (x + width, y + height)
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.x as f64,
            self.y as f64,
            self.width as f64,
            self.height as f64,
        )
    }
}
