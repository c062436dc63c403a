// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: the node model of a hierarchical diagram editor.
//!
//! A diagram is a forest of nested, axis-aligned rounded rectangles. Every
//! node that is not a root lies inside its parent's content area (the
//! parent's rectangle minus a title band reserved for the label and the
//! padding along the right and bottom sides), and every
//! node is at least large enough to hold its children plus padding. This
//! crate owns that forest and every operation that must keep those rules
//! intact.
//!
//! - Loading: [`Tree::from_desc`] builds the arena from a nested
//!   [`NodeDesc`] list; [`FlatDiagram::into_nested`] assembles that list from
//!   a flat node list with containment relations. Malformed input fails fast
//!   with a [`LoadError`].
//! - Layout: [`Tree::compute_dimensions`] (bottom-up sizes),
//!   [`Tree::assign_positions`] (single-row placement) and
//!   [`Tree::fit_to_children`] (keep operator-placed positions, enforce
//!   containment). [`LayoutMode`] picks which runs at load.
//! - Picking: [`Tree::find_hit`] returns the deepest visible node under a
//!   point, in draw order, classified as body or resize handle.
//!   [`Tree::update_hover`] keeps hover highlights on the hit path.
//! - Mutation: [`Tree::move_by`] and [`Tree::resize_by`] clamp instead of
//!   failing, carrying descendants along.
//! - Visibility: [`VisibilityStacks::toggle`] hides or shows a node's
//!   children and can always undo its own hides.
//!
//! Nodes are addressed by dense [`NodeId`]s internally and by caller-chosen
//! [`NodeKey`]s externally.
//!
//! ## Example
//!
//! ```rust
//! use canopy_tree::{HitZone, LayoutConfig, LayoutMode, NodeDesc, NodeKey, Tree, VisibilityStacks};
//! use kurbo::{Point, Vec2};
//!
//! let desc = NodeDesc::new(NodeKey(1), "service", (100.0, 100.0))
//!     .with_size(200.0, 150.0)
//!     .with_child(NodeDesc::new(NodeKey(2), "handler", (120.0, 120.0)).with_size(60.0, 40.0));
//! let mut tree = Tree::from_desc(&[desc], LayoutConfig::default(), LayoutMode::Preserve).unwrap();
//!
//! let hit = tree.find_hit(Point::new(150.0, 140.0)).unwrap();
//! assert_eq!(tree.key(hit.node), Some(NodeKey(2)));
//! assert_eq!(hit.zone, HitZone::Body);
//!
//! // Dragging the child far away stops at its parent's padding.
//! tree.move_by(hit.node, Vec2::new(1000.0, 0.0));
//! assert_eq!(tree.rect(hit.node).unwrap().x1, 290.0);
//!
//! let mut stacks = VisibilityStacks::new();
//! let root = tree.find(NodeKey(1)).unwrap();
//! stacks.toggle(&mut tree, root, None);
//! assert!(!tree.is_rendered(hit.node));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod desc;
mod error;
mod hit;
mod layout;
mod mutate;
mod tree;
mod types;
mod visibility;

pub use config::{LayoutConfig, LayoutMode};
pub use desc::{DiagramDesc, EdgeDesc, FlatDiagram, FlatNode, NodeDesc};
pub use error::LoadError;
pub use hit::{Hit, HitZone};
pub use tree::{Ancestors, DepthFirst, Tree};
pub use types::{NodeFlags, NodeId, NodeKey};
pub use visibility::{ToggleOutcome, VisibilityStacks};
