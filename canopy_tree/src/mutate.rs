// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive mutations. Requests that would break containment are clamped,
//! never rejected: the mutation succeeds with a reduced effective delta.

use kurbo::{Point, Rect, Size, Vec2};

use crate::Tree;
use crate::types::NodeId;

impl Tree {
    /// Move a node and its subtree by `delta`, then clamp the node into its
    /// parent's content area.
    ///
    /// Descendants keep their offsets relative to the node. Returns the delta
    /// that was actually applied. Roots are never clamped.
    pub fn move_by(&mut self, id: NodeId, delta: Vec2) -> Vec2 {
        if !self.contains(id) {
            return Vec2::ZERO;
        }
        let before = self.node(id).rect.origin();
        self.translate_subtree(id, delta);
        let residual = self.clamp_into_parent(id);

        #[cfg(feature = "tracing")]
        if residual != Vec2::ZERO {
            tracing::debug!(node = %self.node(id).key, ?delta, ?residual, "move clamped");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = residual;

        self.node(id).rect.origin() - before
    }

    /// Grow or shrink a node by `delta`, keeping its origin where possible.
    ///
    /// The size never drops below [`Tree::min_size_of`]. If the new size would
    /// overflow the parent's content area, the offending dimension shrinks to
    /// the space left; if the minimum still does not fit, the node's origin
    /// shifts back so it does. Returns the resulting size.
    pub fn resize_by(&mut self, id: NodeId, delta: Vec2) -> Size {
        let Some(rect) = self.rect(id) else {
            return Size::ZERO;
        };
        let min = self.min_size_of(id);
        let mut width = (rect.width() + delta.x).max(min.width);
        let mut height = (rect.height() + delta.y).max(min.height);
        let mut origin = rect.origin();

        if let Some(bounds) = self.parent_of(id).and_then(|p| self.content_rect(p)) {
            (origin.x, width) = fit_span(origin.x, width, min.width, bounds.x1);
            (origin.y, height) = fit_span(origin.y, height, min.height, bounds.y1);
        }

        self.translate_subtree(id, origin - rect.origin());
        let node = self.node_mut(id);
        node.rect = Rect::from_origin_size(origin, (width, height));
        self.clamp_into_parent(id);

        let size = self.node(id).rect.size();
        #[cfg(feature = "tracing")]
        if size != rect.size() + Size::new(delta.x, delta.y) {
            tracing::debug!(node = %self.node(id).key, ?delta, ?size, "resize clamped");
        }
        size
    }

    /// Clamp a node's origin into its parent's content rectangle, carrying the
    /// subtree along. Returns the correction that was applied.
    ///
    /// Where the node does not fit at all the top-left side wins, so the node
    /// never covers its parent's title band.
    pub(crate) fn clamp_into_parent(&mut self, id: NodeId) -> Vec2 {
        let Some(parent) = self.parent_of(id) else {
            return Vec2::ZERO;
        };
        let Some(content) = self.content_rect(parent) else {
            return Vec2::ZERO;
        };
        let rect = self.node(id).rect;
        let clamped = Point::new(
            rect.x0.min(content.x1 - rect.width()).max(content.x0),
            rect.y0.min(content.y1 - rect.height()).max(content.y0),
        );
        let correction = clamped - rect.origin();
        self.translate_subtree(id, correction);
        correction
    }
}

/// Fit `[start, start + len]` so it ends no later than `limit`, shrinking
/// toward `min` first and moving `start` back only if that is not enough.
fn fit_span(start: f64, len: f64, min: f64, limit: f64) -> (f64, f64) {
    let available = limit - start;
    if len <= available {
        return (start, len);
    }
    let len = available.max(min);
    if len > available {
        (limit - len, len)
    } else {
        (start, len)
    }
}
