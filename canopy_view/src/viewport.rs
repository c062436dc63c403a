// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Smallest scale a [`Viewport`] accepts unless configured otherwise.
pub const DEFAULT_MIN_SCALE: f64 = 1e-6;

/// Largest scale a [`Viewport`] accepts unless configured otherwise.
pub const DEFAULT_MAX_SCALE: f64 = 1e6;

/// Pan + zoom state mapping world coordinates onto a screen-space view.
///
/// The offset is applied before scaling, so it is expressed in world units:
/// panning by a screen delta moves the offset by `delta / scale`.
///
/// The view size is only consulted by zoom recentring, which distributes the
/// world-space growth of a zoom step according to where the anchor sits
/// inside the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    view_size: Size,
    offset: Vec2,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Viewport {
    /// Creates a viewport with zero offset and a scale of `1.0`.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the size of the screen-space view.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the size of the screen-space view.
    ///
    /// Offset and scale are left untouched.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the world-space offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the world-space offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the configured `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the scale, clamped into the configured limits.
    ///
    /// Non-positive and non-finite values are rejected and leave the scale
    /// unchanged. Returns whether the scale changed.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if scale <= 0.0 || !scale.is_finite() {
            return false;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The range is normalized so that `min <= max`, and the lower limit is
    /// kept strictly positive. The current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min.max(f64::MIN_POSITIVE);
        self.max_scale = max.max(self.min_scale);
        self.scale = self.scale.clamp(self.min_scale, self.max_scale);
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        ((world.to_vec2() + self.offset) * self.scale).to_point()
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        (screen.to_vec2() / self.scale - self.offset).to_point()
    }

    /// Converts a screen-space delta into a world-space delta.
    #[must_use]
    pub fn to_world_delta(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Converts a world-space length into screen pixels.
    #[must_use]
    pub fn to_screen_length(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_screen(rect.origin()),
            self.to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a screen-space rectangle into world coordinates.
    #[must_use]
    pub fn to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_world(rect.origin()),
            self.to_world(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the world-space extent currently covered by the view.
    #[must_use]
    pub fn visible_world_size(&self) -> Size {
        Size::new(
            self.view_size.width / self.scale,
            self.view_size.height / self.scale,
        )
    }

    /// Returns the world-space rectangle currently covered by the view.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.to_world_rect(self.view_size.to_rect())
    }

    /// Pans by a screen-space delta.
    ///
    /// The offset moves by `delta / scale`, so one screen pixel always moves
    /// the canvas by one pixel regardless of zoom.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += self.to_world_delta(delta);
    }

    /// Zooms by `amount` around a screen-space anchor.
    ///
    /// The new scale is `scale * (1 + amount)`, clamped into the scale
    /// limits. The world point under `anchor` stays under `anchor`. Returns
    /// whether the scale changed.
    pub fn zoom_at(&mut self, anchor: Point, amount: f64) -> bool {
        self.zoom_by_factor_at(anchor, 1.0 + amount)
    }

    /// Multiplies the scale by `factor` around a screen-space anchor.
    ///
    /// Non-positive and non-finite factors are rejected. Returns whether the
    /// scale changed.
    pub fn zoom_by_factor_at(&mut self, anchor: Point, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() {
            return false;
        }
        let old = self.scale;
        let new = (old * factor).clamp(self.min_scale, self.max_scale);
        if new == old {
            return false;
        }
        self.scale = new;
        self.recentre(anchor, new / old - 1.0);
        true
    }

    /// Applies one pinch-gesture frame.
    ///
    /// `prev_mid` and `mid` are the previous and current midpoints of the two
    /// touches in screen space, and `factor` is the ratio of the current to
    /// the previous finger distance. The scale is updated first, the canvas
    /// then pans by the midpoint movement, and finally the zoom is recentred
    /// on the current midpoint.
    pub fn pinch(&mut self, prev_mid: Point, mid: Point, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() {
            return false;
        }
        let old = self.scale;
        self.scale = (old * factor).clamp(self.min_scale, self.max_scale);
        self.offset += (mid - prev_mid) / self.scale;
        let amount = self.scale / old - 1.0;
        if amount != 0.0 {
            self.recentre(mid, amount);
        }
        true
    }

    /// Shifts the offset after a zoom step of `amount` so that `anchor` keeps
    /// pointing at the same world position.
    ///
    /// The world units gained or lost along each axis are split according to
    /// the anchor's fractional position within the view: an anchor at the
    /// top-left corner puts all growth to the right and below.
    fn recentre(&mut self, anchor: Point, amount: f64) {
        let span = self.visible_world_size();
        let fraction = self.fraction_of_view(anchor);
        self.offset -= Vec2::new(
            span.width * amount * fraction.x,
            span.height * amount * fraction.y,
        );
    }

    fn fraction_of_view(&self, anchor: Point) -> Vec2 {
        let fx = if self.view_size.width > 0.0 {
            anchor.x / self.view_size.width
        } else {
            0.0
        };
        let fy = if self.view_size.height > 0.0 {
            anchor.y / self.view_size.height
        } else {
            0.0
        };
        Vec2::new(fx, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn identity_by_default() {
        let view = Viewport::new(Size::new(100.0, 100.0));
        let p = Point::new(12.5, -3.0);
        assert_eq!(view.to_screen(p), p);
        assert_eq!(view.to_world(p), p);
    }

    #[test]
    fn screen_and_world_are_inverse() {
        let mut view = Viewport::new(Size::new(640.0, 480.0));
        view.set_offset(Vec2::new(-30.0, 45.0));
        assert!(view.set_scale(2.5));
        let p = Point::new(101.0, 7.25);
        assert!(close(view.to_world(view.to_screen(p)), p));
    }

    #[test]
    fn pan_moves_by_world_distance_per_pixel() {
        let mut view = Viewport::new(Size::new(640.0, 480.0));
        view.set_scale(2.0);
        view.pan_by_screen(Vec2::new(10.0, -4.0));
        assert_eq!(view.offset(), Vec2::new(5.0, -2.0));
        // One screen pixel of drag is one screen pixel of movement.
        assert_eq!(view.to_screen(Point::ZERO), Point::new(10.0, -4.0));
    }

    #[test]
    fn zoom_at_top_left_keeps_offset() {
        let mut view = Viewport::new(Size::new(800.0, 600.0));
        view.set_offset(Vec2::new(13.0, -7.0));
        assert!(view.zoom_at(Point::ZERO, 1.0));
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.offset(), Vec2::new(13.0, -7.0));
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut view = Viewport::new(Size::new(800.0, 600.0));
        view.set_offset(Vec2::new(20.0, 30.0));
        let anchor = Point::new(500.0, 120.0);
        let before = view.to_world(anchor);
        assert!(view.zoom_at(anchor, -0.2));
        assert!(close(view.to_world(anchor), before));
    }

    #[test]
    fn wheel_zoom_out_at_bottom_right() {
        let mut view = Viewport::new(Size::new(400.0, 200.0));
        let anchor = Point::new(400.0, 200.0);
        let before = view.to_world(anchor);
        assert!(view.zoom_at(anchor, -0.5));
        assert_eq!(view.scale(), 0.5);
        assert!(close(view.to_world(anchor), before));
    }

    #[test]
    fn scale_never_reaches_zero() {
        let mut view = Viewport::new(Size::new(100.0, 100.0));
        assert!(!view.zoom_at(Point::ZERO, -1.0));
        assert!(!view.zoom_at(Point::ZERO, -3.0));
        assert!(!view.set_scale(0.0));
        assert!(!view.set_scale(f64::NAN));
        assert_eq!(view.scale(), 1.0);

        view.set_scale_limits(0.25, 4.0);
        for _ in 0..20 {
            view.zoom_at(Point::ZERO, -0.9);
        }
        assert_eq!(view.scale(), 0.25);
        for _ in 0..20 {
            view.zoom_at(Point::ZERO, 9.0);
        }
        assert_eq!(view.scale(), 4.0);
    }

    #[test]
    fn scale_limits_are_normalized() {
        let mut view = Viewport::new(Size::new(100.0, 100.0));
        view.set_scale_limits(3.0, -1.0);
        let (min, max) = view.scale_limits();
        assert!(min > 0.0);
        assert_eq!(max, 3.0);
    }

    #[test]
    fn pinch_without_spread_is_a_pan() {
        let mut view = Viewport::new(Size::new(400.0, 400.0));
        view.set_scale(2.0);
        assert!(view.pinch(Point::new(100.0, 100.0), Point::new(110.0, 90.0), 1.0));
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.offset(), Vec2::new(5.0, -5.0));
    }

    #[test]
    fn pinch_spread_keeps_midpoint_fixed() {
        let mut view = Viewport::new(Size::new(400.0, 400.0));
        let mid = Point::new(150.0, 250.0);
        let before = view.to_world(mid);
        assert!(view.pinch(mid, mid, 1.5));
        assert_eq!(view.scale(), 1.5);
        assert!(close(view.to_world(mid), before));
    }

    #[test]
    fn rect_conversion_scales_extent() {
        let mut view = Viewport::new(Size::new(400.0, 400.0));
        view.set_offset(Vec2::new(10.0, 10.0));
        view.set_scale(2.0);
        let r = view.to_screen_rect(Rect::new(0.0, 0.0, 50.0, 25.0));
        assert_eq!(r, Rect::new(20.0, 20.0, 120.0, 70.0));
        assert_eq!(view.to_world_rect(r), Rect::new(0.0, 0.0, 50.0, 25.0));
    }
}
