use crate::angle::Angle;
use crate::points::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Rectangle with its own orientation in global space.
///
/// `local` is expressed in the rectangle's frame: the x axis points along
/// `(cos, sin)` of `angle`, the y axis along `(-sin, cos)`, and the local origin
/// sits at `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedRect {
    center: Point,
    angle: Angle,
    local: Rect,
}

impl OrientedRect {
    pub fn new(center: Point, angle: Angle, local: Rect) -> Self {
        Self {
            center,
            angle,
            local,
        }
    }

    /// Axis-aligned rectangle (angle zero), centered on its own center.
    pub fn from_rect(rect: &Rect) -> Self {
        let c = rect.center();
        Self::new(
            c,
            Angle::ZERO,
            Rect::new(
                rect.min.x - c.x,
                rect.min.y - c.y,
                rect.max.x - c.x,
                rect.max.y - c.y,
            ),
        )
    }

    pub fn local_rect(&self) -> &Rect {
        &self.local
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn global_center(&self) -> Point {
        self.center
    }

    /// Local-frame point to global space.
    pub fn convert_from(&self, p: &Point) -> Point {
        self.center.add(&p.rotate(self.angle.cos(), self.angle.sin()))
    }

    /// Global point to the local frame.
    pub fn convert_to(&self, p: &Point) -> Point {
        p.sub(&self.center).rotate(self.angle.cos(), -self.angle.sin())
    }

    /// Corners of the local rect in global space.
    pub fn corners(&self) -> [Point; 4] {
        self.local.corners().map(|c| self.convert_from(&c))
    }

    /// Axis-aligned bounding rectangle in global space.
    pub fn global_rect(&self) -> Rect {
        let [a, b, c, d] = self.corners();
        let mut rect = Rect::from_corners(a, c);
        rect.add_point(&b);
        rect.add_point(&d);
        rect
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.local.contains(&self.convert_to(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        a.equal_dx_dy(&b, 1e-9)
    }

    #[test]
    fn unrotated_rect_converts_by_translation() {
        let r = OrientedRect::new(
            Point::new(10.0, 20.0),
            Angle::ZERO,
            Rect::new(-2.0, -1.0, 2.0, 1.0),
        );
        assert!(approx(r.convert_from(&Point::new(2.0, 1.0)), Point::new(12.0, 21.0)));
        assert_eq!(r.global_rect(), Rect::new(8.0, 19.0, 12.0, 21.0));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let r = OrientedRect::new(
            Point::ZERO,
            Angle::from_degrees(90.0),
            Rect::new(-2.0, -1.0, 2.0, 1.0),
        );
        // local x axis now points along global +y
        assert!(approx(r.convert_from(&Point::new(2.0, 0.0)), Point::new(0.0, 2.0)));
        let bounds = r.global_rect();
        assert!((bounds.width() - 2.0).abs() < 1e-9);
        assert!((bounds.height() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn convert_to_inverts_convert_from() {
        let r = OrientedRect::new(
            Point::new(-3.0, 7.0),
            Angle::new(0.7),
            Rect::new(-5.0, -5.0, 5.0, 5.0),
        );
        let p = Point::new(1.5, -4.25);
        assert!(approx(r.convert_to(&r.convert_from(&p)), p));
    }

    #[test]
    fn contains_respects_orientation() {
        let r = OrientedRect::new(
            Point::ZERO,
            Angle::from_degrees(45.0),
            Rect::new(-1.0, -1.0, 1.0, 1.0),
        );
        // (1.3, 0) lies inside the rotated square's diagonal reach
        assert!(r.contains(&Point::new(1.3, 0.0)));
        assert!(!r.contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn from_rect_keeps_bounds() {
        let rect = Rect::new(2.0, 4.0, 6.0, 10.0);
        let r = OrientedRect::from_rect(&rect);
        assert_eq!(r.global_center(), Point::new(4.0, 7.0));
        assert_eq!(r.global_rect(), rect);
    }
}
