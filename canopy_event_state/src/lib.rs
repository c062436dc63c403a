// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Event State: small state machines for diagram editor input.
//!
//! Each module tracks just enough state across events to turn decoded
//! pointer and touch input into editor intents. None of them know about the
//! diagram itself; node identities are a caller-chosen type parameter.
//!
//! - [`interaction`]: `Idle` / `Dragging` / `Panning` with per-move deltas.
//! - [`click`]: click recognition with a slop distance, and a timer-based
//!   double-click detector that holds single clicks until they can no longer
//!   become double clicks.
//! - [`drag`]: movement deltas and total offsets of a drag.
//! - [`pinch`]: midpoint movement and distance ratio of a two-finger pinch.
//!
//! ## Example
//!
//! ```rust
//! use canopy_event_state::interaction::{DragMode, Gesture, InteractionState, PointerButton};
//! use kurbo::{Point, Vec2};
//!
//! let mut state = InteractionState::new();
//! state.on_down(PointerButton::Primary, Some(("box", DragMode::Move)), Point::new(5.0, 5.0));
//! let step = state.on_move(Point::new(9.0, 5.0));
//! assert_eq!(
//!     step,
//!     Some(Gesture::Drag { target: "box", mode: DragMode::Move, delta: Vec2::new(4.0, 0.0) })
//! );
//! state.on_up();
//! assert!(state.is_idle());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod interaction;
pub mod pinch;
