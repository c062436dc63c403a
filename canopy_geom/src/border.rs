// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border intersection and edge ports for axis-aligned (rounded) rectangles.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, RoundedRect};

use crate::fit_radius;

/// One of the four edges of an axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The edge at `x0`.
    Left,
    /// The edge at `x1`.
    Right,
    /// The edge at `y0`.
    Top,
    /// The edge at `y1`.
    Bottom,
}

impl Side {
    /// All sides, in the order used to break ties.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Returns `true` for the left and right edges.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the midpoint of this edge of `rect`.
    pub fn midpoint(self, rect: Rect) -> Point {
        let c = rect.center();
        match self {
            Self::Left => Point::new(rect.x0, c.y),
            Self::Right => Point::new(rect.x1, c.y),
            Self::Top => Point::new(c.x, rect.y0),
            Self::Bottom => Point::new(c.x, rect.y1),
        }
    }
}

/// Returns the side of `rect` whose midpoint is closest to `target` in
/// Manhattan distance. Ties go to the earlier entry of [`Side::ALL`].
pub fn nearest_side(rect: Rect, target: Point) -> Side {
    let mut best = Side::Left;
    let mut best_distance = f64::INFINITY;
    for side in Side::ALL {
        let m = side.midpoint(rect);
        let distance = (m.x - target.x).abs() + (m.y - target.y).abs();
        if distance < best_distance {
            best = side;
            best_distance = distance;
        }
    }
    best
}

/// Shapes that can answer "where does a ray from my centre toward `target`
/// leave me?".
pub trait BorderPoint {
    /// Returns the point where the ray from the shape's centre toward
    /// `target` crosses the shape's border.
    ///
    /// If `target` coincides with the centre there is no direction to follow
    /// and the centre itself is returned.
    fn border_toward(&self, target: Point) -> Point;
}

impl BorderPoint for Rect {
    fn border_toward(&self, target: Point) -> Point {
        ray_exit(*self, target).unwrap_or_else(|| self.center())
    }
}

/// The straight-edge exit is computed first. If it lands inside one of the
/// corner cutouts (within the corner radius of the corner along both axes),
/// it is re-projected onto that corner's arc.
impl BorderPoint for RoundedRect {
    fn border_toward(&self, target: Point) -> Point {
        let rect = self.rect();
        let Some(p) = ray_exit(rect, target) else {
            return rect.center();
        };
        let radii = self.radii();

        let r = fit_radius(rect, radii.top_left);
        if p.x < rect.x0 + r && p.y < rect.y0 + r {
            return onto_arc(p, Point::new(rect.x0 + r, rect.y0 + r), r);
        }
        let r = fit_radius(rect, radii.top_right);
        if p.x > rect.x1 - r && p.y < rect.y0 + r {
            return onto_arc(p, Point::new(rect.x1 - r, rect.y0 + r), r);
        }
        let r = fit_radius(rect, radii.bottom_right);
        if p.x > rect.x1 - r && p.y > rect.y1 - r {
            return onto_arc(p, Point::new(rect.x1 - r, rect.y1 - r), r);
        }
        let r = fit_radius(rect, radii.bottom_left);
        if p.x < rect.x0 + r && p.y > rect.y1 - r {
            return onto_arc(p, Point::new(rect.x0 + r, rect.y1 - r), r);
        }
        p
    }
}

/// Intersect the ray `center + t * (target - center)`, `t >= 0`, with the
/// four edges of `rect` and return the first crossing.
///
/// An edge is a candidate when its orthogonal coordinate at the crossing lies
/// within the rectangle's span. An axis along which the ray does not move is
/// skipped entirely, which keeps aligned centres away from a division by zero.
fn ray_exit(rect: Rect, target: Point) -> Option<Point> {
    let c = rect.center();
    let d = target - c;
    let mut best: Option<(f64, Point)> = None;
    let mut consider = |t: f64, p: Point| {
        if t >= 0.0 && best.is_none_or(|(best_t, _)| t < best_t) {
            best = Some((t, p));
        }
    };

    if d.x != 0.0 {
        for x in [rect.x0, rect.x1] {
            let t = (x - c.x) / d.x;
            let y = c.y + t * d.y;
            if within(rect.y0, rect.y1, y) {
                consider(t, Point::new(x, y));
            }
        }
    }
    if d.y != 0.0 {
        for y in [rect.y0, rect.y1] {
            let t = (y - c.y) / d.y;
            let x = c.x + t * d.x;
            if within(rect.x0, rect.x1, x) {
                consider(t, Point::new(x, y));
            }
        }
    }

    best.map(|(_, p)| p)
}

/// Span check with a little slack so that exits through an exact corner are
/// not lost to rounding.
#[inline]
fn within(lo: f64, hi: f64, v: f64) -> bool {
    let slack = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
    v >= lo - slack && v <= hi + slack
}

fn onto_arc(p: Point, center: Point, radius: f64) -> Point {
    let v = p - center;
    let len = v.hypot();
    if len > 0.0 {
        center + v * (radius / len)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn horizontal_exit_skips_vertical_branch() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.border_toward(Point::new(500.0, 25.0)), Point::new(100.0, 25.0));
        assert_eq!(r.border_toward(Point::new(-500.0, 25.0)), Point::new(0.0, 25.0));
    }

    #[test]
    fn vertical_exit_skips_horizontal_branch() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.border_toward(Point::new(50.0, 300.0)), Point::new(50.0, 50.0));
        assert_eq!(r.border_toward(Point::new(50.0, -300.0)), Point::new(50.0, 0.0));
    }

    #[test]
    fn diagonal_exit_picks_first_crossing() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        // Centre (50, 25), heading toward (150, 75): crosses x = 100 at y = 50,
        // which is also the bottom edge, i.e. the exact corner.
        let p = r.border_toward(Point::new(150.0, 75.0));
        assert!(close(p, Point::new(100.0, 50.0)));

        // Shallow slope leaves through the right edge.
        let p = r.border_toward(Point::new(250.0, 45.0));
        assert!(close(p, Point::new(100.0, 30.0)));
    }

    #[test]
    fn target_inside_still_exits() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = r.border_toward(Point::new(60.0, 50.0));
        assert!(close(p, Point::new(100.0, 50.0)));
    }

    #[test]
    fn coincident_centres_fall_back_to_centre() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(r.border_toward(Point::new(50.0, 50.0)), Point::new(50.0, 50.0));
        let rr = RoundedRect::from_rect(r, 10.0);
        assert_eq!(rr.border_toward(Point::new(50.0, 50.0)), Point::new(50.0, 50.0));
    }

    #[test]
    fn corner_exit_lands_on_arc() {
        let rr = RoundedRect::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 10.0);
        let p = rr.border_toward(Point::new(200.0, 200.0));
        let arc_center = Point::new(90.0, 90.0);
        assert!(((p - arc_center).hypot() - 10.0).abs() < 1e-9);
        // On the diagonal the projection lands at 45 degrees.
        let d = 10.0 / 2.0_f64.sqrt();
        assert!(close(p, Point::new(90.0 + d, 90.0 + d)));
    }

    #[test]
    fn straight_part_is_untouched_by_rounding() {
        let rr = RoundedRect::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 10.0);
        assert_eq!(rr.border_toward(Point::new(50.0, -400.0)), Point::new(50.0, 0.0));
    }

    #[test]
    fn sides_and_midpoints() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(Side::Left.midpoint(r), Point::new(0.0, 20.0));
        assert_eq!(Side::Bottom.midpoint(r), Point::new(50.0, 40.0));
        assert!(Side::Right.is_vertical());
        assert!(!Side::Top.is_vertical());
    }

    #[test]
    fn nearest_side_uses_manhattan_distance() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(nearest_side(r, Point::new(300.0, 20.0)), Side::Right);
        assert_eq!(nearest_side(r, Point::new(50.0, 300.0)), Side::Bottom);
        assert_eq!(nearest_side(r, Point::new(-10.0, -200.0)), Side::Top);
    }
}
