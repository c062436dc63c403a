// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Editor: an interactive hierarchical diagram.
//!
//! A [`Session`] owns one diagram (node tree, edges, visibility stacks) and
//! one [`Viewport`](canopy_view::Viewport), and turns decoded input into
//! edits:
//!
//! - Pointer: [`Session::pointer_down`], [`Session::pointer_move`],
//!   [`Session::pointer_up`], [`Session::pointer_leave`] and
//!   [`Session::wheel`]. Pressing a node's body moves it, pressing its
//!   resize handle resizes it, a secondary press on empty canvas pans.
//!   Idle motion drives hover highlighting.
//! - Touch: [`Session::touch_start`], [`Session::touch_move`] and
//!   [`Session::touch_end`]. One finger moves a node, two fingers pinch.
//! - Clicks: a double click on a node toggles its children. A lone click is
//!   held back until [`Session::tick`] sees the double-click delay expire
//!   and is then reported as [`SessionEvent::Click`].
//!
//! Every input returns a [`Response`] saying whether to redraw. Drawing is
//! left to the caller: [`Session::draw_list`] resolves the frame in screen
//! space, and [`DrawList::paint`] replays it onto any [`Surface`].
//!
//! ## Example
//!
//! ```rust
//! use canopy_editor::{Session, SessionConfig};
//! use canopy_event_state::interaction::PointerButton;
//! use canopy_tree::{DiagramDesc, EdgeDesc, NodeDesc, NodeKey};
//! use kurbo::{Point, Size};
//!
//! let desc = DiagramDesc {
//!     nodes: vec![
//!         NodeDesc::new(NodeKey(1), "api", (100.0, 100.0))
//!             .with_size(200.0, 150.0)
//!             .with_child(NodeDesc::new(NodeKey(2), "handler", (120.0, 120.0)).with_size(60.0, 40.0)),
//!         NodeDesc::new(NodeKey(3), "db", (400.0, 300.0)).with_size(120.0, 80.0),
//!     ],
//!     edges: vec![EdgeDesc::new(NodeKey(2), NodeKey(3), "QUERIES")],
//! };
//! let mut session = Session::new(&desc, SessionConfig::default(), Size::new(800.0, 600.0)).unwrap();
//!
//! // Drag the handler 20 pixels to the right.
//! let _ = session.pointer_down(Point::new(150.0, 140.0), PointerButton::Primary, 0);
//! let response = session.pointer_move(Point::new(170.0, 140.0));
//! assert!(response.redraw);
//! let _ = session.pointer_up(Point::new(170.0, 140.0), 50);
//!
//! // Collapse the API node; the edge now starts at it.
//! let _ = session.toggle(NodeKey(1), Some(false));
//! let frame = session.draw_list();
//! assert_eq!(frame.nodes.len(), 2);
//! assert_eq!(frame.edges.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod draw;
mod session;

pub use config::{DEFAULT_WHEEL_DIVISOR, SessionConfig};
pub use draw::{DrawEdge, DrawList, DrawNode, StrokeStyle, Surface, Theme};
pub use session::{Response, Session, SessionEvent};
