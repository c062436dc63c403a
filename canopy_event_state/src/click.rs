// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition and double-click detection.
//!
//! Two small state machines:
//!
//! - [`ClickState`] decides whether a press and its release form a click.
//!   A press that travels further than the slop distance is a drag, not a
//!   click, and a release over a different target never clicks.
//! - [`DoubleClick`] holds a recognised click behind a delay. A second click
//!   on the same target within the delay turns the pair into a double click;
//!   otherwise the held click is released as a single click, either by
//!   [`DoubleClick::poll`] once the delay has passed or when a click on
//!   another target supersedes it.
//!
//! Timestamps are milliseconds on any monotonic clock the caller chooses.
//!
//! ## Usage
//!
//! ```
//! use canopy_event_state::click::{ClickResult, ClickState, DoubleClick, DoubleClickResult};
//! use kurbo::Point;
//!
//! let mut clicks: ClickState<u32> = ClickState::new();
//! let mut double: DoubleClick<u32> = DoubleClick::new();
//!
//! clicks.on_down(7, Point::new(10.0, 10.0), 1000);
//! assert_eq!(clicks.on_up(&7, Point::new(11.0, 10.0)), ClickResult::Click(7));
//! assert_eq!(double.on_click(7, 1000), DoubleClickResult::Pending);
//!
//! clicks.on_down(7, Point::new(10.0, 10.0), 1120);
//! assert_eq!(clicks.on_up(&7, Point::new(10.0, 10.0)), ClickResult::Click(7));
//! assert_eq!(double.on_click(7, 1150), DoubleClickResult::Double(7));
//!
//! // Nothing is left to time out.
//! assert_eq!(double.poll(5000), None);
//! ```

use kurbo::Point;

/// Default distance, in screen pixels, a press may travel and still click.
pub const DEFAULT_SLOP: f64 = 4.0;

/// Default double-click delay in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// State for an active press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Target under the pointer at press time.
    pub target: K,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Timestamp of the press.
    pub down_time: u64,
    /// True once the pointer travelled further than the slop distance.
    pub slop_exceeded: bool,
}

/// Result of releasing a press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickResult<K> {
    /// The press and release form a click on this target.
    Click(K),
    /// No click; carries the pressed target if there was a press.
    Suppressed(Option<K>),
}

/// Press/release click recogniser for a single pointer.
#[derive(Clone, Debug)]
pub struct ClickState<K> {
    press: Option<Press<K>>,
    /// Distance the pointer may travel during a press and still click.
    pub slop: f64,
}

impl<K: PartialEq + Clone> ClickState<K> {
    /// Create a recogniser with [`DEFAULT_SLOP`].
    pub fn new() -> Self {
        Self::with_slop(DEFAULT_SLOP)
    }

    /// Create a recogniser with a custom slop distance.
    pub fn with_slop(slop: f64) -> Self {
        Self { press: None, slop }
    }

    /// Record a press on `target`. Replaces any press still active.
    pub fn on_down(&mut self, target: K, position: Point, timestamp: u64) {
        self.press = Some(Press {
            target,
            down_position: position,
            down_time: timestamp,
            slop_exceeded: false,
        });
    }

    /// Track pointer movement during a press.
    ///
    /// Returns `Some(target)` the first time the press leaves the slop
    /// distance, `None` otherwise.
    pub fn on_move(&mut self, position: Point) -> Option<K> {
        let press = self.press.as_mut()?;
        if press.slop_exceeded || press.down_position.distance(position) <= self.slop {
            return None;
        }
        press.slop_exceeded = true;
        Some(press.target.clone())
    }

    /// Release the press over `current_target`.
    pub fn on_up(&mut self, current_target: &K, position: Point) -> ClickResult<K> {
        let Some(press) = self.press.take() else {
            return ClickResult::Suppressed(None);
        };
        let travelled = press.slop_exceeded || press.down_position.distance(position) > self.slop;
        if travelled || press.target != *current_target {
            return ClickResult::Suppressed(Some(press.target));
        }
        ClickResult::Click(press.target)
    }

    /// Drop the active press. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// The active press, if any.
    pub fn press(&self) -> Option<&Press<K>> {
        self.press.as_ref()
    }

    /// Returns `true` while a press is active.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

impl<K: PartialEq + Clone> Default for ClickState<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of feeding a click to [`DoubleClick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DoubleClickResult<K> {
    /// The click is held until the delay elapses or a second click arrives.
    Pending,
    /// An earlier held click became a single click; the new click is held.
    Superseded(K),
    /// The click completed a double click on this target.
    Double(K),
}

/// Timer-based double-click detector.
#[derive(Clone, Debug)]
pub struct DoubleClick<K> {
    pending: Option<(K, u64)>,
    /// Delay in milliseconds within which a second click counts as double.
    pub delay: u64,
}

impl<K: PartialEq + Clone> DoubleClick<K> {
    /// Create a detector with [`DEFAULT_DOUBLE_CLICK_MS`].
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DOUBLE_CLICK_MS)
    }

    /// Create a detector with a custom delay in milliseconds.
    pub fn with_delay(delay: u64) -> Self {
        Self {
            pending: None,
            delay,
        }
    }

    /// Feed a recognised click.
    pub fn on_click(&mut self, target: K, timestamp: u64) -> DoubleClickResult<K> {
        match self.pending.take() {
            Some((held, at))
                if held == target && timestamp.saturating_sub(at) < self.delay =>
            {
                DoubleClickResult::Double(held)
            }
            Some((held, _)) => {
                self.pending = Some((target, timestamp));
                DoubleClickResult::Superseded(held)
            }
            None => {
                self.pending = Some((target, timestamp));
                DoubleClickResult::Pending
            }
        }
    }

    /// Release the held click as a single click once the delay has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<K> {
        match &self.pending {
            Some((_, at)) if now.saturating_sub(*at) >= self.delay => {
                self.pending.take().map(|(target, _)| target)
            }
            _ => None,
        }
    }

    /// Timestamp at which the held click times out, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending
            .as_ref()
            .map(|(_, at)| at.saturating_add(self.delay))
    }

    /// The held click's target.
    pub fn pending(&self) -> Option<&K> {
        self.pending.as_ref().map(|(target, _)| target)
    }

    /// Forget the held click without reporting it.
    pub fn cancel(&mut self) -> Option<K> {
        self.pending.take().map(|(target, _)| target)
    }
}

impl<K: PartialEq + Clone> Default for DoubleClick<K> {
    fn default() -> Self {
        Self::new()
    }
}
