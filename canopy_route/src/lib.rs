// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Route: edges between diagram nodes and the paths they are drawn
//! along.
//!
//! Edges name their endpoints by [`NodeKey`](canopy_tree::NodeKey) and never
//! own nodes. Each edge carries *display endpoints*: the nodes it is actually
//! drawn between once hidden nodes are taken into account. When an endpoint
//! is hidden, the edge is drawn to the nearest ancestor whose whole path is
//! visible ([`resolve_display_endpoint`]). Call [`Edges::resolve`] after every
//! visibility change.
//!
//! Routes are computed against the nodes' rounded rectangles:
//!
//! - [`RouteMode::Straight`]: a single segment along the centre-to-centre
//!   line, clipped to both borders. Exits that fall in a rounded corner are
//!   moved onto the corner's arc.
//! - [`RouteMode::Orthogonal`]: leaves and enters through edge midpoints and
//!   bends at right angles on the midline between the two.
//!
//! Unknown keys, hidden roots and edges that collapse onto a single node are
//! skipped rather than reported.
//!
//! ## Example
//!
//! ```rust
//! use canopy_route::{Edges, RouteMode};
//! use canopy_tree::{EdgeDesc, LayoutConfig, LayoutMode, NodeDesc, NodeKey, Tree};
//! use kurbo::Point;
//!
//! let tree = Tree::from_desc(
//!     &[
//!         NodeDesc::new(NodeKey(1), "api", (0.0, 0.0)).with_size(100.0, 50.0),
//!         NodeDesc::new(NodeKey(2), "db", (300.0, 0.0)).with_size(100.0, 50.0),
//!     ],
//!     LayoutConfig::default(),
//!     LayoutMode::Preserve,
//! )
//! .unwrap();
//! let edges = Edges::resolved(&[EdgeDesc::new(NodeKey(1), NodeKey(2), "QUERIES")], &tree);
//!
//! let (_, route) = edges.routes(&tree, RouteMode::Straight).next().unwrap();
//! assert_eq!(route.start(), Point::new(100.0, 25.0));
//! assert_eq!(route.end(), Point::new(300.0, 25.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;
mod route;

pub use edge::{Edge, Edges, resolve_display_endpoint};
pub use route::{Route, RouteMode, route_between};
