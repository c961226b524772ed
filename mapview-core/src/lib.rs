pub mod angle;
pub mod config;
pub mod error;
pub mod matrix;
pub mod oriented_rect;
pub mod params;
pub mod pixel_rect;
pub mod points;
pub mod screen;
pub mod transforms;

pub use angle::{angle_in_2pi, angle_to, Angle};
pub use config::{ScreenConfig, DEFAULT_SCREEN_CONFIG};
pub use error::ScreenError;
pub use matrix::Mat3;
pub use oriented_rect::OrientedRect;
pub use params::ScreenParams;
pub use pixel_rect::PixelRect;
pub use points::{Point, Rect};
pub use screen::Screen;
pub use transforms::{
    calc_transform, check_similarity, extract_gtop_params, is_panning_and_rotate, GtoPParams,
};
