//! Matrix-first helpers: building a gesture transform from two point pairs,
//! decomposing a global-to-pixel matrix, and comparing two screen states.

use crate::angle::{angle_in_2pi, angle_to};
use crate::config::DEFAULT_SCREEN_CONFIG;
use crate::error::ScreenError;
use crate::matrix::Mat3;
use crate::points::Point;
use crate::screen::Screen;

/// Relative tolerance for the orthogonality and equal-norm checks in
/// [`check_similarity`].
pub const SIMILARITY_TOLERANCE: f64 = 1e-6;

/// Parameters recovered from a global-to-pixel similarity matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GtoPParams {
    /// Rotation in `[0, 2π)`
    pub angle: f64,
    /// Pixels per global unit
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Similarity matrix mapping `old1 -> new1` and `old2 -> new2` exactly.
///
/// Used to turn a two-finger gesture into a transform: the uniform scale is the
/// ratio of the segment lengths and the rotation the difference of their polar
/// angles.
pub fn calc_transform(
    old1: &Point,
    old2: &Point,
    new1: &Point,
    new2: &Point,
) -> Result<Mat3, ScreenError> {
    let old_len = old1.distance(old2);
    if old_len == 0.0 || !old_len.is_finite() {
        return Err(ScreenError::degenerate(format!(
            "reference points {:?} and {:?} must be distinct and finite",
            old1, old2
        )));
    }

    let s = new1.distance(new2) / old_len;
    if !s.is_finite() {
        return Err(ScreenError::degenerate("target points must be finite"));
    }
    let a = angle_to(new1, new2) - angle_to(old1, old2);

    Ok(Mat3::identity()
        .shift(-old1.x, -old1.y)
        .rotate_by(a)
        .scale(s, s)
        .shift(new1.x, new1.y))
}

/// Decompose a global-to-pixel matrix.
///
/// Only meaningful for similarity matrices (see [`check_similarity`]): the
/// scale is the norm of the first row and the angle is read from its direction.
pub fn extract_gtop_params(m: &Mat3) -> GtoPParams {
    GtoPParams {
        angle: angle_in_2pi((-m[(0, 1)]).atan2(m[(0, 0)])),
        scale: m[(0, 0)].hypot(m[(0, 1)]),
        dx: m[(2, 0)],
        dy: m[(2, 1)],
    }
}

/// Reject matrices that are not a uniform scale, rotation (optionally with a
/// reflection) and translation.
pub fn check_similarity(m: &Mat3) -> Result<(), ScreenError> {
    if !m.is_finite() {
        return Err(ScreenError::degenerate("matrix has non-finite entries"));
    }
    if m[(0, 2)] != 0.0 || m[(1, 2)] != 0.0 || m[(2, 2)] != 1.0 {
        return Err(ScreenError::NotSimilarity);
    }

    let row0 = Point::new(m[(0, 0)], m[(0, 1)]);
    let row1 = Point::new(m[(1, 0)], m[(1, 1)]);
    let n0 = row0.x * row0.x + row0.y * row0.y;
    let n1 = row1.x * row1.x + row1.y * row1.y;
    if n0 == 0.0 || n1 == 0.0 {
        return Err(ScreenError::SingularMatrix);
    }

    let dot = row0.x * row1.x + row0.y * row1.y;
    let reference = n0.max(n1);
    if (n0 - n1).abs() > SIMILARITY_TOLERANCE * reference
        || dot.abs() > SIMILARITY_TOLERANCE * reference
    {
        return Err(ScreenError::NotSimilarity);
    }
    Ok(())
}

/// Whether going from `s1` to `s2` involves no zoom, only pan and rotation.
///
/// Each screen maps a global offset away from its global-rect center into pixel
/// space; the offset is derived from `s1`'s local rect for both screens. The two
/// pixel displacements are compared per axis with an absolute tolerance. This is
/// a heuristic rather than an exact scale comparison.
pub fn is_panning_and_rotate(s1: &Screen, s2: &Screen) -> bool {
    let r1 = s1.global_rect().local_rect();
    let r2 = s2.global_rect().local_rect();

    let c1 = r1.center();
    let c2 = r2.center();

    let glob_pt = c1.sub(&r1.min);

    let displacement = |s: &Screen, c: &Point| {
        let rect = s.global_rect();
        s.gtop(&rect.convert_from(c))
            .sub(&s.gtop(&rect.convert_from(&c.add(&glob_pt))))
    };

    let p1 = displacement(s1, &c1);
    let p2 = displacement(s2, &c2);

    p1.equal_dx_dy(&p2, DEFAULT_SCREEN_CONFIG.pan_rotate_tolerance)
}
