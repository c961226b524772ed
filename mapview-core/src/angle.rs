//! Rotation angle of the global axes relative to the pixel axes.

use crate::points::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Normalize an angle in radians into `[0, 2π)`.
pub fn angle_in_2pi(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Polar angle of the segment from `from` to `to`.
pub fn angle_to(from: &Point, to: &Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Angle wrapped into `[0, 2π)` with its cosine and sine cached.
///
/// Serializes as the bare radian value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle {
    val: f64,
    cos: f64,
    sin: f64,
}

impl Angle {
    pub const ZERO: Self = Self {
        val: 0.0,
        cos: 1.0,
        sin: 0.0,
    };

    pub fn new(radians: f64) -> Self {
        let val = angle_in_2pi(radians);
        Self {
            val,
            cos: val.cos(),
            sin: val.sin(),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees.to_radians())
    }

    /// Raw value in `[0, 2π)`.
    pub fn val(&self) -> f64 {
        self.val
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// Composition by addition, re-wrapped.
    pub fn rotated_by(&self, delta: f64) -> Self {
        Self::new(self.val + delta)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self::new(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.val
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn wraps_negative_angles_into_range() {
        assert!((angle_in_2pi(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angle_in_2pi(TAU), 0.0);
        assert_eq!(angle_in_2pi(-1e-300), 0.0);
    }

    #[test]
    fn wraps_large_angles_into_range() {
        let a = Angle::new(5.0 * PI);
        assert!((a.val() - PI).abs() < 1e-12);
        assert!((a.cos() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn caches_cos_and_sin() {
        let a = Angle::from_degrees(90.0);
        assert!(a.cos().abs() < 1e-12);
        assert!((a.sin() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotated_by_zero_is_identity() {
        let a = Angle::new(1.234);
        assert_eq!(a.rotated_by(0.0), a);
    }

    #[test]
    fn rotated_by_wraps_past_full_turn() {
        let a = Angle::new(3.0 * FRAC_PI_2).rotated_by(PI);
        assert!((a.val() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_to_measures_polar_angle() {
        let a = angle_to(&Point::new(5.0, 5.0), &Point::new(5.0, 15.0));
        assert!((a - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_bare_radians() {
        let json = serde_json::to_string(&Angle::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
        let restored: Angle = serde_json::from_str("-1.5707963267948966").unwrap();
        assert!((restored.val() - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }
}
