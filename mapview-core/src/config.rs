//! Screen configuration.
//!
//! Holds the defaults a freshly constructed [`Screen`](crate::Screen) starts
//! from and the tolerances used when comparing screen states.

use crate::PixelRect;

/// Configuration for a screen transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenConfig {
    /// Viewport a new screen is sized to
    pub default_pixel_rect: PixelRect,
    /// Global units per pixel for a new screen
    pub default_scale: f64,
    /// Per-axis absolute tolerance for the pan/rotate detector
    pub pan_rotate_tolerance: f64,
}

/// Default screen configuration.
/// This is the canonical source of truth for the default viewport.
pub static DEFAULT_SCREEN_CONFIG: ScreenConfig = ScreenConfig {
    default_pixel_rect: PixelRect {
        x: 0,
        y: 0,
        width: 640,
        height: 480,
    },
    default_scale: 0.1,
    pan_rotate_tolerance: 1e-5,
};

impl Default for ScreenConfig {
    fn default() -> Self {
        DEFAULT_SCREEN_CONFIG
    }
}
