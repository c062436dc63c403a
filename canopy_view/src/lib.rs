// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy View: the world/screen coordinate contract for diagram canvases.
//!
//! A [`Viewport`] holds a per-axis `offset` and a uniform `scale` and maps
//! between world ("true") coordinates and screen (view) coordinates:
//!
//! - `to_screen(p) = (p + offset) * scale`
//! - `to_world(s) = s / scale - offset`
//!
//! The two conversions are exact inverses for every finite point, and the
//! scale can never reach zero: updates are clamped into configurable limits
//! and non-positive factors are rejected.
//!
//! Pan and zoom operations take already-decoded input (screen-space deltas,
//! wheel deltas, pinch midpoints). Wiring raw pointer or touch events is left
//! to a higher layer.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use canopy_view::Viewport;
//!
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//!
//! // Drag the canvas 40px to the right.
//! view.pan_by_screen(Vec2::new(40.0, 0.0));
//! assert_eq!(view.to_screen(Point::ZERO), Point::new(40.0, 0.0));
//!
//! // Zoom in around the cursor; the world point under it stays put.
//! let cursor = Point::new(200.0, 150.0);
//! let before = view.to_world(cursor);
//! view.zoom_at(cursor, 0.5);
//! let after = view.to_world(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, Viewport};
