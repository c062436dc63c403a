// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries: z-ordered hit testing, resize-handle classification and
//! hover tracking.

use alloc::vec::Vec;

use canopy_geom::{in_resize_handle, open_contains};
use kurbo::Point;

use crate::Tree;
use crate::types::{NodeFlags, NodeId};

/// Which part of a node a point landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitZone {
    /// The node's body: dragging it moves the node.
    Body,
    /// The resize handle near the bottom-right corner: dragging it resizes.
    Handle,
}

/// Results of a hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The matched node.
    pub node: NodeId,
    /// Where on the node the point landed.
    pub zone: HitZone,
    /// Path from root to node (inclusive).
    pub path: Vec<NodeId>,
}

impl Tree {
    /// Resolve a world-space point to the topmost visible node under it.
    ///
    /// Containment uses open intervals, so a point on a border belongs to
    /// neither side. Later roots and later siblings win over earlier ones, and
    /// a node's children win over the node itself, so the most deeply nested
    /// visible node under the point is returned. Hidden nodes and their whole
    /// subtrees are skipped.
    ///
    /// If the point also lies in the matched node's resize handle the hit is
    /// classified as [`HitZone::Handle`].
    pub fn find_hit(&self, point: Point) -> Option<Hit> {
        let eligible = |id: &&NodeId| {
            let node = self.node(**id);
            node.flags.contains(NodeFlags::VISIBLE) && open_contains(node.rect, point)
        };

        let mut current = *self.roots.iter().rev().find(eligible)?;
        let mut path = alloc::vec![current];
        // Children are contained in their parent, so descending greedily into
        // the topmost eligible child visits exactly the draw-order winners.
        while let Some(&child) = self.node(current).children.iter().rev().find(eligible) {
            path.push(child);
            current = child;
        }

        let zone = if self.is_in_resize_zone(current, point) {
            HitZone::Handle
        } else {
            HitZone::Body
        };
        Some(Hit {
            node: current,
            zone,
            path,
        })
    }

    /// Returns `true` if `point` lies within `radius / 2` of the node's
    /// resize-handle anchor `(x1 - radius, y1 - radius)`.
    pub fn is_in_resize_zone(&self, id: NodeId, point: Point) -> bool {
        self.nodes
            .get(id.idx())
            .is_some_and(|n| in_resize_handle(n.rect, n.radius, point))
    }

    /// Highlight the hit path under `point` and clear the highlight
    /// everywhere else. `None` clears all highlights, e.g. when the pointer
    /// leaves the canvas.
    ///
    /// Returns `true` if any node's hover state changed.
    pub fn update_hover(&mut self, point: Option<Point>) -> bool {
        let path = point
            .and_then(|p| self.find_hit(p))
            .map(|hit| hit.path)
            .unwrap_or_default();
        let mut changed = false;
        for i in 0..self.nodes.len() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId indices are 32-bit; a tree never holds more than u32::MAX nodes."
            )]
            let id = NodeId::new(i as u32);
            changed |= self.set_flag(id, NodeFlags::HOVER, path.contains(&id));
        }
        changed
    }
}
