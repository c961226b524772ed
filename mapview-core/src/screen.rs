//! The screen transform: mapping between the pixel viewport and global space.
//!
//! A [`Screen`] owns four primary parameters (pixel rect, scale, angle, origin)
//! and keeps the derived state (both matrices, the oriented global rect and its
//! clip rect) in sync by recomputing it after every mutation.

use crate::angle::Angle;
use crate::config::{ScreenConfig, DEFAULT_SCREEN_CONFIG};
use crate::error::ScreenError;
use crate::matrix::Mat3;
use crate::oriented_rect::OrientedRect;
use crate::params::ScreenParams;
use crate::pixel_rect::PixelRect;
use crate::points::{Point, Rect};
use crate::transforms::{check_similarity, extract_gtop_params, GtoPParams};

/// Bidirectional pixel <-> global transform for one viewport.
///
/// Pixel space has Y growing downward, global space has Y growing upward.
/// `org` is the global point shown at the center of `pixel_rect`, and `scale`
/// is global units per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pixel_rect: Rect,
    scale: f64,
    angle: Angle,
    org: Point,

    global_rect: OrientedRect,
    clip_rect: Rect,
    gtop: Mat3,
    ptog: Mat3,
}

impl Default for Screen {
    fn default() -> Self {
        Self::with_config(&DEFAULT_SCREEN_CONFIG)
    }
}

impl Screen {
    /// Default 640x480 viewport centered on (320, 240).
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport sized to `config.default_pixel_rect`, centered on the pixel
    /// rect's own center, with no rotation.
    ///
    /// An empty pixel rect or a non-positive scale in `config` falls back to
    /// the default configuration's values.
    pub fn with_config(config: &ScreenConfig) -> Self {
        let mut pixel_rect = config.default_pixel_rect.to_rect();
        if !pixel_rect.has_area() {
            log::warn!(
                "Config pixel rect {:?} is empty, using default",
                config.default_pixel_rect
            );
            pixel_rect = DEFAULT_SCREEN_CONFIG.default_pixel_rect.to_rect();
        }
        let mut scale = config.default_scale;
        if !(scale.is_finite() && scale > 0.0) {
            log::warn!("Config scale {} is not positive, using default", scale);
            scale = DEFAULT_SCREEN_CONFIG.default_scale;
        }

        Self::from_valid_params(ScreenParams {
            pixel_rect,
            scale,
            angle: Angle::ZERO,
            org: pixel_rect.center(),
        })
    }

    /// Viewport of `pixel_rect` showing all of `global_rect`.
    pub fn from_rects(
        pixel_rect: PixelRect,
        global_rect: &OrientedRect,
    ) -> Result<Self, ScreenError> {
        let mut screen = Self::default();
        screen.on_size(pixel_rect)?;
        screen.set_from_rect(global_rect)?;
        Ok(screen)
    }

    /// Restore a screen from its primary parameters.
    pub fn from_params(params: ScreenParams) -> Result<Self, ScreenError> {
        params.validate()?;
        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: ScreenParams) -> Self {
        let mut screen = Self {
            pixel_rect: params.pixel_rect,
            scale: params.scale,
            angle: params.angle,
            org: params.org,
            global_rect: OrientedRect::new(params.org, params.angle, params.pixel_rect),
            clip_rect: params.pixel_rect,
            gtop: Mat3::identity(),
            ptog: Mat3::identity(),
        };
        screen.update_dependent_parameters();
        screen
    }

    /// Snapshot of the primary parameters.
    pub fn params(&self) -> ScreenParams {
        ScreenParams {
            pixel_rect: self.pixel_rect,
            scale: self.scale,
            angle: self.angle,
            org: self.org,
        }
    }

    /// Change several primary parameters with a single recomputation.
    ///
    /// The closure edits a copy; if the result fails validation the screen is
    /// left as it was.
    pub fn edit<F>(&mut self, f: F) -> Result<(), ScreenError>
    where
        F: FnOnce(&mut ScreenParams),
    {
        let mut params = self.params();
        f(&mut params);
        params.validate()?;

        self.pixel_rect = params.pixel_rect;
        self.scale = params.scale;
        self.angle = params.angle;
        self.org = params.org;
        self.update_dependent_parameters();
        Ok(())
    }

    fn update_dependent_parameters(&mut self) {
        let center = self.pixel_rect.center();

        self.ptog = Mat3::identity()
            .shift(-center.x, -center.y) // pixel center to (0, 0)
            .scale(1.0, -1.0) // pixel Y grows down, global Y grows up
            .scale(self.scale, self.scale)
            .rotate(self.angle.cos(), self.angle.sin())
            .shift(self.org.x, self.org.y);

        let Some(gtop) = self.ptog.inverse() else {
            // Unreachable while scale > 0; every mutator validates that.
            debug_assert!(false, "singular pixel-to-global matrix");
            log::error!(
                "Pixel-to-global matrix is singular (scale = {}), keeping previous global-to-pixel matrix",
                self.scale
            );
            return;
        };
        self.gtop = gtop;

        let px_center = self.ptog(&center);
        let size_x = self
            .ptog(&Point::new(self.pixel_rect.max.x, center.y))
            .distance(&px_center);
        let size_y = self
            .ptog(&Point::new(center.x, self.pixel_rect.min.y))
            .distance(&px_center);

        self.global_rect = OrientedRect::new(
            self.org,
            self.angle,
            Rect::new(-size_x, -size_y, size_x, size_y),
        );
        self.clip_rect = self.global_rect.global_rect();
    }

    /// Fit `global_rect` inside a viewport shaped like `pixel_rect`.
    ///
    /// Takes the larger of the horizontal and vertical scales so nothing is
    /// cropped. Angle and origin come from `global_rect`. Only the size of
    /// `pixel_rect` is used; the screen's own pixel rect is unchanged.
    pub fn set_from_rects(
        &mut self,
        global_rect: &OrientedRect,
        pixel_rect: &Rect,
    ) -> Result<(), ScreenError> {
        if !pixel_rect.has_area() {
            log::warn!("Rejecting fit to pixel rect {:?}: no area", pixel_rect);
            return Err(ScreenError::degenerate(format!(
                "target pixel rect {:?} has no area",
                pixel_rect
            )));
        }

        let local = global_rect.local_rect();
        let h_scale = local.width() / pixel_rect.width();
        let v_scale = local.height() / pixel_rect.height();
        let scale = h_scale.max(v_scale);

        let center = global_rect.global_center();
        if !(scale.is_finite() && scale > 0.0) || !center.is_finite() {
            log::warn!(
                "Rejecting fit to global rect {:?}: scale {} is not positive",
                global_rect,
                scale
            );
            return Err(ScreenError::degenerate(format!(
                "global rect {:?} cannot be fitted",
                global_rect
            )));
        }

        self.scale = scale;
        self.angle = global_rect.angle();
        self.org = center;

        log::debug!(
            "Fitted screen to global rect: scale={}, angle={}, org={:?}",
            self.scale,
            self.angle.val(),
            self.org
        );
        self.update_dependent_parameters();
        Ok(())
    }

    /// Fit `global_rect` inside the current pixel rect.
    pub fn set_from_rect(&mut self, global_rect: &OrientedRect) -> Result<(), ScreenError> {
        let pixel_rect = self.pixel_rect;
        self.set_from_rects(global_rect, &pixel_rect)
    }

    /// Non-finite input is logged and ignored.
    pub fn set_org(&mut self, org: Point) {
        self.commit_org(org, "set_org");
    }

    /// Pan by a pixel-space displacement. Non-finite input is logged and ignored.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        let px_org = self.gtop(&self.org).sub(&Point::new(dx, dy));
        let org = self.ptog(&px_org);
        self.commit_org(org, "move_by");
    }

    /// Pan by a global-space displacement. Non-finite input is logged and ignored.
    pub fn move_g(&mut self, delta: &Point) {
        let org = self.org.sub(delta);
        self.commit_org(org, "move_g");
    }

    fn commit_org(&mut self, org: Point, op: &str) {
        if !org.is_finite() {
            log::warn!("Ignoring {}: origin would become {:?}", op, org);
            return;
        }
        self.org = org;
        self.update_dependent_parameters();
    }

    /// Zoom by `factor`; values above 1 zoom in.
    pub fn scale_by(&mut self, factor: f64) -> Result<(), ScreenError> {
        let scale = self.scale / factor;
        if !(factor.is_finite() && factor > 0.0 && scale.is_finite() && scale > 0.0) {
            log::warn!("Rejecting zoom factor {}", factor);
            return Err(ScreenError::degenerate(format!(
                "zoom factor must be positive and finite, got {}",
                factor
            )));
        }
        self.scale = scale;
        self.update_dependent_parameters();
        Ok(())
    }

    /// Rotate by `delta` radians. Non-finite input is logged and ignored.
    pub fn rotate(&mut self, delta: f64) {
        if !delta.is_finite() {
            log::warn!("Ignoring rotation by {}", delta);
            return;
        }
        self.angle = self.angle.rotated_by(delta);
        self.update_dependent_parameters();
    }

    /// Non-finite input is logged and ignored.
    pub fn set_angle(&mut self, radians: f64) {
        if !radians.is_finite() {
            log::warn!("Ignoring angle {}", radians);
            return;
        }
        self.angle = Angle::new(radians);
        self.update_dependent_parameters();
    }

    /// Resize the viewport. Scale, angle and origin are kept, so the global
    /// extents follow the new pixel size.
    pub fn on_size(&mut self, rect: PixelRect) -> Result<(), ScreenError> {
        if rect.is_empty() {
            log::warn!("Ignoring resize to empty pixel rect {:?}", rect);
            return Err(ScreenError::degenerate(format!(
                "pixel rect {:?} is empty",
                rect
            )));
        }
        log::debug!("Screen resized to {:?}", rect);
        self.pixel_rect = rect.to_rect();
        self.update_dependent_parameters();
        Ok(())
    }

    /// Resize from origin and size. The origin is unsigned, so a viewport
    /// starting left of or above the pixel origin cannot be expressed here.
    pub fn on_size_xywh(
        &mut self,
        x0: u32,
        y0: u32,
        width: u32,
        height: u32,
    ) -> Result<(), ScreenError> {
        self.on_size(PixelRect::new(x0, y0, width, height))
    }

    /// Install a global-to-pixel matrix wholesale, e.g. one built from a
    /// gesture with [`calc_transform`](crate::calc_transform).
    ///
    /// Angle and scale are recovered from the matrix and the origin is the
    /// global point it places at the pixel rect's center. The matrix must be a
    /// similarity transform; on error nothing changes.
    pub fn set_gtop_matrix(&mut self, m: &Mat3) -> Result<(), ScreenError> {
        let (ptog, params) = Self::decompose_gtop(m).map_err(|e| {
            log::warn!("Rejecting global-to-pixel matrix {:?}: {}", m, e);
            e
        })?;
        let scale = 1.0 / params.scale;

        self.gtop = *m;
        self.ptog = ptog;
        self.angle = Angle::new(-params.angle);
        self.scale = scale;
        self.org = self.ptog(&self.pixel_rect.center());

        log::debug!(
            "Installed global-to-pixel matrix: scale={}, angle={}, org={:?}",
            self.scale,
            self.angle.val(),
            self.org
        );
        self.update_dependent_parameters();
        Ok(())
    }

    fn decompose_gtop(m: &Mat3) -> Result<(Mat3, GtoPParams), ScreenError> {
        check_similarity(m)?;
        let ptog = m.inverse().ok_or(ScreenError::SingularMatrix)?;
        let params = extract_gtop_params(m);
        let scale = 1.0 / params.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ScreenError::SingularMatrix);
        }
        Ok((ptog, params))
    }

    pub fn gtop(&self, p: &Point) -> Point {
        self.gtop.transform_point(p)
    }

    pub fn ptog(&self, p: &Point) -> Point {
        self.ptog.transform_point(p)
    }

    /// Map the two diagonal corners of a global rect to pixel space.
    ///
    /// The result is the axis-aligned rect spanned by those two points, not the
    /// bounds of the whole rotated rect.
    pub fn gtop_rect(&self, global: &Rect) -> Rect {
        Rect::from_corners(self.gtop(&global.min), self.gtop(&global.max))
    }

    /// Map the two diagonal corners of a pixel rect to global space.
    pub fn ptog_rect(&self, pixel: &Rect) -> Rect {
        Rect::from_corners(self.ptog(&pixel.min), self.ptog(&pixel.max))
    }

    /// Global-space square covering a touch of `pix_radius` pixels at
    /// `pix_point`, oriented like the screen.
    pub fn touch_rect(&self, pix_point: &Point, pix_radius: f64) -> OrientedRect {
        let r = pix_radius * self.scale;
        OrientedRect::new(self.ptog(pix_point), self.angle, Rect::new(-r, -r, r, r))
    }

    pub fn gtop_matrix(&self) -> &Mat3 {
        &self.gtop
    }

    pub fn ptog_matrix(&self) -> &Mat3 {
        &self.ptog
    }

    pub fn pixel_rect(&self) -> &Rect {
        &self.pixel_rect
    }

    pub fn global_rect(&self) -> &OrientedRect {
        &self.global_rect
    }

    pub fn clip_rect(&self) -> &Rect {
        &self.clip_rect
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn org(&self) -> Point {
        self.org
    }

    pub fn min_pixel_rect_size(&self) -> f64 {
        self.pixel_rect.width().min(self.pixel_rect.height())
    }

    /// Pixel width, rounded.
    pub fn width(&self) -> i32 {
        self.pixel_rect.width().round() as i32
    }

    /// Pixel height, rounded.
    pub fn height(&self) -> i32 {
        self.pixel_rect.height().round() as i32
    }
}
