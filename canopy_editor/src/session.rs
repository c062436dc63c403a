// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session: one diagram, one view, one input state machine.

use canopy_event_state::click::{ClickResult, ClickState, DoubleClick, DoubleClickResult};
use canopy_event_state::interaction::{
    DragMode, Gesture, Interaction, InteractionState, PointerButton,
};
use canopy_event_state::pinch::PinchState;
use canopy_route::Edges;
use canopy_tree::{
    DiagramDesc, FlatDiagram, HitZone, LoadError, NodeId, NodeKey, ToggleOutcome, Tree,
    VisibilityStacks,
};
use canopy_view::Viewport;
use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::config::SessionConfig;
use crate::draw::DrawList;

/// Something the caller may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A single click that did not become a double click.
    Click(NodeKey),
    /// A double click. The node's children were toggled.
    DoubleClick(NodeKey),
    /// A node's children were shown or hidden.
    Toggled {
        /// The toggled node.
        node: NodeKey,
        /// What happened.
        outcome: ToggleOutcome,
    },
}

/// Result of feeding one input to a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// The frame changed and should be redrawn.
    pub redraw: bool,
    /// Events raised by this input, in order.
    pub events: SmallVec<[SessionEvent; 2]>,
}

impl Response {
    fn redraw(redraw: bool) -> Self {
        Self {
            redraw,
            events: SmallVec::new(),
        }
    }
}

/// An interactive diagram.
///
/// Owns the node tree, the edge list, the visibility stacks and the
/// viewport, and routes decoded input to them. Pointer and touch positions
/// are screen pixels; timestamps are milliseconds on any monotonic clock.
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    edges: Edges,
    stacks: VisibilityStacks,
    viewport: Viewport,
    config: SessionConfig,
    interaction: InteractionState<NodeId>,
    clicks: ClickState<NodeId>,
    double: DoubleClick<NodeId>,
    pinch: PinchState,
    pointer: Option<Point>,
}

impl Session {
    /// Load a diagram.
    pub fn new(
        desc: &DiagramDesc,
        config: SessionConfig,
        view_size: Size,
    ) -> Result<Self, LoadError> {
        let tree = Tree::from_desc(&desc.nodes, config.layout, config.layout_mode)?;
        let edges = Edges::resolved(&desc.edges, &tree);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = tree.len(),
            edges = edges.len(),
            drawable = edges.iter().filter(|e| e.display_endpoints().is_some()).count(),
            "session loaded"
        );

        Ok(Self {
            tree,
            edges,
            stacks: VisibilityStacks::new(),
            viewport: Viewport::new(view_size),
            config,
            interaction: InteractionState::new(),
            clicks: ClickState::with_slop(config.click_slop),
            double: DoubleClick::with_delay(config.double_click_ms),
            pinch: PinchState::default(),
            pointer: None,
        })
    }

    /// Load a diagram from a flat node list with containment relations.
    pub fn from_flat(
        flat: FlatDiagram,
        config: SessionConfig,
        view_size: Size,
    ) -> Result<Self, LoadError> {
        Self::new(&flat.into_nested()?, config, view_size)
    }

    /// The node tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The edge list.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the viewport, e.g. to set scale limits.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current pointer interaction.
    pub fn interaction(&self) -> &Interaction<NodeId> {
        self.interaction.current()
    }

    /// When a held click will be reported by [`Session::tick`], if any.
    pub fn click_deadline(&self) -> Option<u64> {
        self.double.deadline()
    }

    /// How deep the visibility stack of `key` is.
    pub fn hide_depth(&self, key: NodeKey) -> usize {
        self.tree.find(key).map_or(0, |id| self.stacks.depth(id))
    }

    /// The canvas was resized.
    pub fn resize_view(&mut self, size: Size) -> Response {
        self.viewport.set_view_size(size);
        Response::redraw(true)
    }

    /// A pointer button went down at `pos`.
    ///
    /// A press on a node starts moving it, or resizing it if the press landed
    /// on its resize handle. A secondary press on empty canvas starts panning.
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton, timestamp: u64) -> Response {
        self.pointer = Some(pos);
        let hit = self.tree.find_hit(self.viewport.to_world(pos));
        let grab = hit.as_ref().map(|hit| {
            let mode = match hit.zone {
                HitZone::Body => DragMode::Move,
                HitZone::Handle => DragMode::Resize,
            };
            (hit.node, mode)
        });
        self.interaction.on_down(button, grab, pos);
        if let (PointerButton::Primary, Some(hit)) = (button, hit) {
            self.clicks.on_down(hit.node, pos, timestamp);
        }
        Response::default()
    }

    /// The pointer moved to `pos`.
    ///
    /// Drags and pans follow the pointer; otherwise the hover highlight is
    /// updated.
    pub fn pointer_move(&mut self, pos: Point) -> Response {
        self.pointer = Some(pos);
        self.clicks.on_move(pos);
        match self.interaction.on_move(pos) {
            Some(gesture) => Response::redraw(self.apply(gesture)),
            None => Response::redraw(self.refresh_hover()),
        }
    }

    /// A pointer button was released at `pos`.
    ///
    /// Ends any drag or pan. A press and release on the same node without
    /// travelling is a click; two clicks on the same node within the
    /// double-click delay toggle its children.
    pub fn pointer_up(&mut self, pos: Point, timestamp: u64) -> Response {
        self.pointer = Some(pos);
        self.interaction.on_up();
        let mut response = Response::default();

        if self.clicks.is_pressed() {
            let under = self.tree.find_hit(self.viewport.to_world(pos)).map(|h| h.node);
            let result = match under {
                Some(node) => self.clicks.on_up(&node, pos),
                None => {
                    self.clicks.cancel();
                    ClickResult::Suppressed(None)
                }
            };
            if let ClickResult::Click(node) = result {
                self.on_click(node, timestamp, &mut response);
            }
        }

        response.redraw |= self.refresh_hover();
        response
    }

    /// The pointer left the canvas. Ends any drag or pan and clears hover.
    pub fn pointer_leave(&mut self) -> Response {
        self.pointer = None;
        self.interaction.on_leave();
        self.clicks.cancel();
        Response::redraw(self.tree.update_hover(None))
    }

    /// A wheel step at `pos`. Positive `delta_y` zooms out.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) -> Response {
        let amount = -delta_y / self.config.wheel_divisor;
        Response::redraw(self.viewport.zoom_at(pos, amount))
    }

    /// Touches went down; `touches` lists every touch now in contact.
    ///
    /// One touch on a node starts moving it. Two or more touches start a
    /// pinch on the first two and drop any single-touch drag.
    pub fn touch_start(&mut self, touches: &[Point]) -> Response {
        match touches {
            [] => {}
            [pos] => {
                self.pinch.end();
                let hit = self.tree.find_hit(self.viewport.to_world(*pos));
                let grab = hit.map(|hit| (hit.node, DragMode::Move));
                self.interaction.on_down(PointerButton::Primary, grab, *pos);
            }
            [a, b, ..] => {
                self.interaction.on_up();
                self.pinch.start(*a, *b);
            }
        }
        Response::default()
    }

    /// Touches moved; `touches` lists every touch in contact.
    pub fn touch_move(&mut self, touches: &[Point]) -> Response {
        match touches {
            [a, b, ..] if self.pinch.is_active() => {
                let Some(delta) = self.pinch.update(*a, *b) else {
                    return Response::default();
                };
                Response::redraw(self.viewport.pinch(delta.prev_mid, delta.mid, delta.factor))
            }
            [pos, ..] => match self.interaction.on_move(*pos) {
                Some(gesture) => Response::redraw(self.apply(gesture)),
                None => Response::default(),
            },
            [] => Response::default(),
        }
    }

    /// Touches lifted or were cancelled. Ends any touch drag or pinch.
    pub fn touch_end(&mut self) -> Response {
        self.pinch.end();
        self.interaction.on_up();
        Response::default()
    }

    /// Advance the clock. Reports a held click once it can no longer
    /// become a double click.
    pub fn tick(&mut self, now: u64) -> Response {
        let mut response = Response::default();
        if let Some(node) = self.double.poll(now)
            && let Some(key) = self.tree.key(node)
        {
            response.events.push(SessionEvent::Click(key));
        }
        response
    }

    /// Show or hide the children of `key`.
    ///
    /// `desired` forces a direction; `None` flips the current state. Edge
    /// endpoints are re-resolved afterwards.
    pub fn toggle(&mut self, key: NodeKey, desired: Option<bool>) -> Response {
        let mut response = Response::default();
        if let Some(id) = self.tree.find(key) {
            self.toggle_node(id, desired, &mut response);
        }
        response
    }

    /// Resolve the current frame.
    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.tree, &self.edges, &self.viewport, self.config.route_mode)
    }

    fn on_click(&mut self, node: NodeId, timestamp: u64, response: &mut Response) {
        match self.double.on_click(node, timestamp) {
            DoubleClickResult::Pending => {}
            DoubleClickResult::Superseded(earlier) => {
                if let Some(key) = self.tree.key(earlier) {
                    response.events.push(SessionEvent::Click(key));
                }
            }
            DoubleClickResult::Double(node) => {
                if let Some(key) = self.tree.key(node) {
                    response.events.push(SessionEvent::DoubleClick(key));
                }
                self.toggle_node(node, None, response);
            }
        }
    }

    fn toggle_node(&mut self, id: NodeId, desired: Option<bool>, response: &mut Response) {
        let outcome = self.stacks.toggle(&mut self.tree, id, desired);
        if outcome.changed() {
            self.edges.resolve(&self.tree);
            self.refresh_hover();
            response.redraw = true;
        }
        if let Some(node) = self.tree.key(id) {
            response.events.push(SessionEvent::Toggled { node, outcome });
        }
    }

    /// Apply one drag or pan step. Returns whether anything moved.
    fn apply(&mut self, gesture: Gesture<NodeId>) -> bool {
        match gesture {
            Gesture::Drag {
                target,
                mode,
                delta,
            } => {
                let delta = self.viewport.to_world_delta(delta);
                match mode {
                    DragMode::Move => self.tree.move_by(target, delta) != Vec2::ZERO,
                    DragMode::Resize => {
                        let before = self.tree.rect(target).map(|r| r.size());
                        Some(self.tree.resize_by(target, delta)) != before
                    }
                }
            }
            Gesture::Pan { delta } => {
                self.viewport.pan_by_screen(delta);
                delta != Vec2::ZERO
            }
        }
    }

    fn refresh_hover(&mut self) -> bool {
        let world = self.pointer.map(|p| self.viewport.to_world(p));
        self.tree.update_hover(world)
    }
}
