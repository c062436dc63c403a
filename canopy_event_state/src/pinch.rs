// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.

use kurbo::Point;

/// Frame-over-frame change of a two-finger gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchDelta {
    /// Midpoint of the two touches on the previous frame.
    pub prev_mid: Point,
    /// Midpoint on this frame.
    pub mid: Point,
    /// Ratio of this frame's finger distance to the previous one.
    ///
    /// `1.0` when the previous distance was zero.
    pub factor: f64,
}

/// Tracks the last pair of touch positions of a pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    last: Option<(Point, Point)>,
}

impl PinchState {
    /// Begin a pinch with two touches.
    pub fn start(&mut self, a: Point, b: Point) {
        self.last = Some((a, b));
    }

    /// Record new touch positions and return the change since the last frame.
    ///
    /// Returns `None` if no pinch is active.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchDelta> {
        let (pa, pb) = self.last.replace((a, b))?;
        let prev_dist = pa.distance(pb);
        let dist = a.distance(b);
        let factor = if prev_dist > 0.0 && dist.is_finite() {
            dist / prev_dist
        } else {
            1.0
        };
        Some(PinchDelta {
            prev_mid: pa.midpoint(pb),
            mid: a.midpoint(b),
            factor,
        })
    }

    /// End the pinch.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a pinch is active.
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
