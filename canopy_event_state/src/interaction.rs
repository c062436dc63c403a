// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor's pointer interaction state machine.
//!
//! ```text
//!            down on a node              up / leave
//!   Idle ─────────────────────▶ Dragging ──────────▶ Idle
//!    │
//!    │ secondary down on empty space    up / leave
//!    └────────────────────────▶ Panning ───────────▶ Idle
//! ```
//!
//! While not idle, each move yields a [`Gesture`] carrying the screen-space
//! delta since the previous move. Converting that delta to world units and
//! applying it is the caller's business.

use kurbo::{Point, Vec2};

use crate::drag::DragState;

/// Which pointer button went down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button, or a touch contact.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Any other button.
    Auxiliary,
}

/// What a drag on a node does to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Translate the node and its subtree.
    Move,
    /// Change the node's size from its bottom-right corner.
    Resize,
}

/// Current interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction<K> {
    /// Nothing pressed.
    Idle,
    /// A node is being moved or resized.
    Dragging {
        /// The node under the press.
        target: K,
        /// Move or resize.
        mode: DragMode,
    },
    /// The view is being panned.
    Panning,
}

/// One step of an active interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture<K> {
    /// Move or resize `target` by `delta` screen pixels.
    Drag {
        /// The dragged node.
        target: K,
        /// Move or resize.
        mode: DragMode,
        /// Screen-space movement since the previous step.
        delta: Vec2,
    },
    /// Pan the view by `delta` screen pixels.
    Pan {
        /// Screen-space movement since the previous step.
        delta: Vec2,
    },
}

/// Drives [`Interaction`] from pointer events.
#[derive(Clone, Debug)]
pub struct InteractionState<K> {
    current: Interaction<K>,
    drag: DragState,
}

impl<K: Clone> InteractionState<K> {
    /// Create an idle state machine.
    pub fn new() -> Self {
        Self {
            current: Interaction::Idle,
            drag: DragState::default(),
        }
    }

    /// The current interaction.
    pub fn current(&self) -> &Interaction<K> {
        &self.current
    }

    /// Returns `true` if nothing is pressed.
    pub fn is_idle(&self) -> bool {
        matches!(self.current, Interaction::Idle)
    }

    /// Handle a press at `pos`.
    ///
    /// `hit` is the node under the pointer with the drag mode its hit zone
    /// implies. A press on a node starts dragging it whatever the button; a
    /// secondary press on empty space starts panning. Presses while an
    /// interaction is already active are ignored.
    pub fn on_down(
        &mut self,
        button: PointerButton,
        hit: Option<(K, DragMode)>,
        pos: Point,
    ) -> &Interaction<K> {
        if !self.is_idle() {
            return &self.current;
        }
        self.current = match (hit, button) {
            (Some((target, mode)), _) => Interaction::Dragging { target, mode },
            (None, PointerButton::Secondary) => Interaction::Panning,
            (None, _) => Interaction::Idle,
        };
        if !self.is_idle() {
            self.drag.start(pos);
        }
        &self.current
    }

    /// Handle pointer motion to `pos`.
    ///
    /// Returns `None` while idle.
    pub fn on_move(&mut self, pos: Point) -> Option<Gesture<K>> {
        let delta = self.drag.update(pos)?;
        match &self.current {
            Interaction::Idle => None,
            Interaction::Dragging { target, mode } => Some(Gesture::Drag {
                target: target.clone(),
                mode: *mode,
                delta,
            }),
            Interaction::Panning => Some(Gesture::Pan { delta }),
        }
    }

    /// Handle a release. Returns the interaction that ended.
    pub fn on_up(&mut self) -> Interaction<K> {
        self.drag.end();
        core::mem::replace(&mut self.current, Interaction::Idle)
    }

    /// Handle the pointer leaving the surface. Same as a release.
    pub fn on_leave(&mut self) -> Interaction<K> {
        self.on_up()
    }

    /// Screen-space offset from the press position, while not idle.
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.drag.total_offset(pos)
    }
}

impl<K: Clone> Default for InteractionState<K> {
    fn default() -> Self {
        Self::new()
    }
}
