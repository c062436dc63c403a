// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout passes: bottom-up sizing, top-down single-row placement, and the
//! containment fit used when operator-placed positions are kept.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::Tree;
use crate::types::NodeId;

impl Tree {
    /// Size every node bottom-up.
    ///
    /// Leaves take their explicit or minimum size. A node with children is
    /// at least `padding + Σ(child.width + padding)` wide and
    /// `title_band + padding + max(child.height)` tall. Origins are left
    /// untouched, so this is idempotent while children do not change.
    pub fn compute_dimensions(&mut self) {
        let cfg = self.config;
        for id in self.post_order() {
            let node = self.node(id);
            let mut size = node.base;
            if !node.children.is_empty() {
                let mut sum = cfg.padding;
                let mut tallest: f64 = 0.0;
                for &c in &node.children {
                    let child = self.node(c).rect;
                    sum += child.width() + cfg.padding;
                    tallest = tallest.max(child.height());
                }
                size.width = size.width.max(sum);
                size.height = size.height.max(cfg.title_band + cfg.padding + tallest);
            }
            let node = self.node_mut(id);
            node.rect = Rect::from_origin_size(node.rect.origin(), size);
        }
    }

    /// Place children top-down in a single row.
    ///
    /// Roots keep their origin. The first child of a node starts at
    /// `(x + padding, y + title_band)` and each following child starts
    /// `padding` to the right of its predecessor. Sizes are left untouched, so
    /// run [`Tree::compute_dimensions`] first.
    pub fn assign_positions(&mut self) {
        let cfg = self.config;
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let rect = self.node(id).rect;
            let mut cursor = rect.x0 + cfg.padding;
            let top = rect.y0 + cfg.title_band;
            for i in 0..self.node(id).children.len() {
                let c = self.node(id).children[i];
                let child = self.node_mut(c);
                child.rect = Rect::from_origin_size(Point::new(cursor, top), child.rect.size());
                cursor += child.rect.width() + cfg.padding;
            }
            stack.extend(self.node(id).children.iter().rev());
        }
    }

    /// Settle operator-placed geometry so that containment holds.
    ///
    /// Bottom-up, every child subtree that starts left of or above its
    /// parent's content area is shifted into it, and the parent grows to
    /// cover its children plus padding. Positions that already satisfy
    /// containment are kept exactly.
    pub fn fit_to_children(&mut self) {
        let title_band = self.config.title_band;
        for id in self.post_order() {
            let rect = self.node(id).rect;
            for i in 0..self.node(id).children.len() {
                let c = self.node(id).children[i];
                let child = self.node(c).rect;
                let shift = Vec2::new(
                    (rect.x0 - child.x0).max(0.0),
                    (rect.y0 + title_band - child.y0).max(0.0),
                );
                self.translate_subtree(c, shift);
            }
            let min = self.min_size_of(id);
            let node = self.node_mut(id);
            let size = Size::new(
                node.rect.width().max(min.width),
                node.rect.height().max(min.height),
            );
            node.rect = Rect::from_origin_size(node.rect.origin(), size);
        }
    }

    /// The smallest size a node may take without losing any of its children.
    ///
    /// Per axis this is the larger of the configured minimum and the furthest
    /// child extent, measured from the node's origin, plus padding. Hidden
    /// children count: they keep their geometry for when they are shown again.
    pub fn min_size_of(&self, id: NodeId) -> Size {
        let cfg = &self.config;
        let Some(node) = self.nodes.get(id.idx()) else {
            return Size::new(cfg.min_width, cfg.min_height);
        };
        let mut min = Size::new(cfg.min_width, cfg.min_height);
        for &c in &node.children {
            let child = self.node(c).rect;
            min.width = min.width.max(child.x1 - node.rect.x0 + cfg.padding);
            min.height = min.height.max(child.y1 - node.rect.y0 + cfg.padding);
        }
        min
    }
}
