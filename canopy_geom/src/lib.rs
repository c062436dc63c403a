// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level helpers for diagram nodes drawn as rounded rectangles.
//!
//! This crate provides small, reusable primitives built on top of [`kurbo`].
//! It is intentionally decoupled from any particular node tree or router:
//! callers pass world-space rectangles and radii and get points or booleans
//! back.
//!
//! # Key pieces
//!
//! - [`open_contains`] – strict point-in-rectangle test. Points on the border
//!   do not count, so two nodes that merely touch never both claim a point.
//! - [`resize_handle`] / [`in_resize_handle`] – the disc anchored near the
//!   bottom-right corner of a node that starts a resize instead of a move.
//! - [`BorderPoint`] – where a ray from a shape's centre toward a target
//!   leaves the shape. Implemented for [`Rect`] and [`RoundedRect`]; for the
//!   latter, exits that land in a corner cutout are projected onto the arc.
//! - [`Side`] and [`nearest_side`] – edge midpoints used as exit ports for
//!   orthogonal routing.
//!
//! Degenerate input never divides by zero: aligned centres skip the branch
//! for the axis they do not move along, and coincident centres fall back to
//! the centre itself.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Point, Rect};

mod border;

pub use border::{BorderPoint, Side, nearest_side};

/// Returns `true` if `pt` lies strictly inside `rect`.
///
/// Both axes use open intervals: `x ∈ (x0, x1)` and `y ∈ (y0, y1)`.
#[inline]
pub fn open_contains(rect: Rect, pt: Point) -> bool {
    pt.x > rect.x0 && pt.x < rect.x1 && pt.y > rect.y0 && pt.y < rect.y1
}

/// Returns the resize-handle disc of a node.
///
/// The disc is centred at `(x1 - radius, y1 - radius)` and has a radius of
/// `radius / 2`, where `radius` is the node's corner radius.
#[inline]
pub fn resize_handle(rect: Rect, radius: f64) -> Circle {
    let radius = radius.abs();
    Circle::new((rect.x1 - radius, rect.y1 - radius), radius / 2.0)
}

/// Returns `true` if `pt` lies within the resize-handle disc of a node.
///
/// The disc boundary is inclusive.
pub fn in_resize_handle(rect: Rect, radius: f64, pt: Point) -> bool {
    let handle = resize_handle(rect, radius);
    (pt - handle.center).hypot2() <= handle.radius * handle.radius
}

/// Clamp a corner radius so that it fits the rectangle.
#[inline]
pub(crate) fn fit_radius(rect: Rect, radius: f64) -> f64 {
    radius
        .abs()
        .min(rect.width().abs() / 2.0)
        .min(rect.height().abs() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_contains_excludes_border() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(open_contains(r, Point::new(5.0, 5.0)));
        assert!(!open_contains(r, Point::new(0.0, 5.0)));
        assert!(!open_contains(r, Point::new(5.0, 10.0)));
        assert!(!open_contains(r, Point::new(11.0, 5.0)));
    }

    #[test]
    fn handle_is_anchored_at_bottom_right() {
        let r = Rect::new(100.0, 100.0, 300.0, 250.0);
        let handle = resize_handle(r, 10.0);
        assert_eq!(handle.center, Point::new(290.0, 240.0));
        assert_eq!(handle.radius, 5.0);
    }

    #[test]
    fn handle_hit_and_miss() {
        let r = Rect::new(100.0, 100.0, 300.0, 250.0);
        assert!(in_resize_handle(r, 10.0, Point::new(290.0, 240.0)));
        // Boundary is inclusive.
        assert!(in_resize_handle(r, 10.0, Point::new(295.0, 240.0)));
        assert!(!in_resize_handle(r, 10.0, Point::new(296.0, 240.0)));
        assert!(!in_resize_handle(r, 10.0, Point::new(150.0, 150.0)));
    }

    #[test]
    fn zero_radius_handle_is_a_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(in_resize_handle(r, 0.0, Point::new(10.0, 10.0)));
        assert!(!in_resize_handle(r, 0.0, Point::new(9.9, 10.0)));
    }

    #[test]
    fn radius_fits_small_rects() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(fit_radius(r, 10.0), 2.0);
        assert_eq!(fit_radius(r, 1.5), 1.5);
    }
}
