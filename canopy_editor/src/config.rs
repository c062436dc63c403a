// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_event_state::click::{DEFAULT_DOUBLE_CLICK_MS, DEFAULT_SLOP};
use canopy_route::RouteMode;
use canopy_tree::{LayoutConfig, LayoutMode};

/// Wheel delta that zooms by a factor of two.
pub const DEFAULT_WHEEL_DIVISOR: f64 = 500.0;

/// Session-wide settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Layout constants for the node tree.
    pub layout: LayoutConfig,
    /// Layout pass run once at load.
    pub layout_mode: LayoutMode,
    /// How edges are routed.
    pub route_mode: RouteMode,
    /// A wheel step of `delta_y` zooms by `-delta_y / wheel_divisor`.
    pub wheel_divisor: f64,
    /// Double-click delay in milliseconds.
    pub double_click_ms: u64,
    /// Distance in screen pixels a press may travel and still click.
    pub click_slop: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            layout_mode: LayoutMode::default(),
            route_mode: RouteMode::default(),
            wheel_divisor: DEFAULT_WHEEL_DIVISOR,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            click_slop: DEFAULT_SLOP,
        }
    }
}

impl SessionConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these layout constants.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Run this layout pass at load.
    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Route edges this way.
    pub fn with_route_mode(mut self, mode: RouteMode) -> Self {
        self.route_mode = mode;
        self
    }

    /// Set the wheel divisor. Non-positive or non-finite values are ignored.
    pub fn with_wheel_divisor(mut self, divisor: f64) -> Self {
        if divisor > 0.0 && divisor.is_finite() {
            self.wheel_divisor = divisor;
        }
        self
    }

    /// Set the double-click delay in milliseconds.
    pub fn with_double_click_ms(mut self, ms: u64) -> Self {
        self.double_click_ms = ms;
        self
    }

    /// Set the click slop in screen pixels.
    pub fn with_click_slop(mut self, slop: f64) -> Self {
        self.click_slop = slop.max(0.0);
        self
    }
}
