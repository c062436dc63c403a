// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, loading, accessors and traversal.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, RoundedRect, Size, Vec2};

use crate::config::{LayoutConfig, LayoutMode};
use crate::desc::NodeDesc;
use crate::error::LoadError;
use crate::types::{NodeFlags, NodeId, NodeKey};

/// Arena of diagram nodes.
///
/// Nodes are created once by [`Tree::from_desc`] and afterwards only change
/// geometry and flags. Each node owns an ordered list of children; the parent
/// link is a derived lookup index over those lists.
///
/// ## Example
///
/// ```rust
/// use canopy_tree::{LayoutConfig, LayoutMode, NodeDesc, NodeKey, Tree};
/// use kurbo::Rect;
///
/// let desc = NodeDesc::new(NodeKey(1), "root", (100.0, 100.0))
///     .with_size(200.0, 150.0)
///     .with_child(NodeDesc::new(NodeKey(2), "child", (120.0, 120.0)).with_size(60.0, 40.0));
/// let tree = Tree::from_desc(&[desc], LayoutConfig::default(), LayoutMode::Preserve).unwrap();
///
/// let child = tree.find(NodeKey(2)).unwrap();
/// assert_eq!(tree.rect(child), Some(Rect::new(120.0, 120.0, 180.0, 160.0)));
/// assert_eq!(tree.parent_of(child), tree.find(NodeKey(1)));
/// ```
#[derive(Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
    keys: HashMap<NodeKey, NodeId>,
    pub(crate) config: LayoutConfig,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hidden = self
            .nodes
            .iter()
            .filter(|n| !n.flags.contains(NodeFlags::VISIBLE))
            .count();
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("hidden", &hidden)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) key: NodeKey,
    pub(crate) label: String,
    pub(crate) rect: Rect,
    pub(crate) radius: f64,
    /// Explicit size, or the configured minimum per axis.
    pub(crate) base: Size,
    pub(crate) flags: NodeFlags,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Tree {
    /// Load a tree from nested descriptions of its roots.
    ///
    /// Keys must be unique and all geometry finite. Sizes default to the
    /// configured minimum, and geometry is then settled according to `mode`.
    pub fn from_desc(
        roots: &[NodeDesc],
        config: LayoutConfig,
        mode: LayoutMode,
    ) -> Result<Self, LoadError> {
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            keys: HashMap::new(),
            config,
        };

        // Pre-order build. Children are pushed reversed so that they are
        // popped, and therefore appended to their parent, in order.
        let mut stack: Vec<(&NodeDesc, Option<NodeId>)> =
            roots.iter().rev().map(|d| (d, None)).collect();
        while let Some((desc, parent)) = stack.pop() {
            check_finite(desc)?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId indices are 32-bit; a tree never holds more than u32::MAX nodes."
            )]
            let id = NodeId::new(tree.nodes.len() as u32);
            if tree.keys.insert(desc.key, id).is_some() {
                return Err(LoadError::DuplicateKey(desc.key));
            }
            let base = Size::new(
                desc.width.unwrap_or(config.min_width).max(config.min_width),
                desc.height
                    .unwrap_or(config.min_height)
                    .max(config.min_height),
            );
            let radius = desc.radius.map(f64::abs).unwrap_or(if desc.children.is_empty() {
                config.leaf_radius
            } else {
                config.default_radius
            });
            tree.nodes.push(Node {
                key: desc.key,
                label: desc.label.clone(),
                rect: Rect::from_origin_size(desc.origin, base),
                radius,
                base,
                flags: NodeFlags::default(),
                parent,
                children: Vec::with_capacity(desc.children.len()),
            });
            match parent {
                Some(p) => tree.node_mut(p).children.push(id),
                None => tree.roots.push(id),
            }
            stack.extend(desc.children.iter().rev().map(|c| (c, Some(id))));
        }

        tree.relink_parents();
        match mode {
            LayoutMode::Preserve => tree.fit_to_children(),
            LayoutMode::Flow => {
                tree.compute_dimensions();
                tree.assign_positions();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = tree.nodes.len(),
            roots = tree.roots.len(),
            ?mode,
            "loaded diagram tree"
        );
        Ok(tree)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The layout constants this tree was loaded with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Root nodes in z-order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate every node id in arena order, which is pre-order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId indices are 32-bit; a tree never holds more than u32::MAX nodes."
    )]
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId::new(i as u32))
    }

    /// Look up a node by key.
    pub fn find(&self, key: NodeKey) -> Option<NodeId> {
        self.keys.get(&key).copied()
    }

    /// Returns `true` if `id` belongs to this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// The key of a node.
    pub fn key(&self, id: NodeId) -> Option<NodeKey> {
        self.nodes.get(id.idx()).map(|n| n.key)
    }

    /// The label of a node.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.idx()).map(|n| n.label.as_str())
    }

    /// World-space rectangle of a node.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id.idx()).map(|n| n.rect)
    }

    /// Corner radius of a node.
    pub fn radius(&self, id: NodeId) -> Option<f64> {
        self.nodes.get(id.idx()).map(|n| n.radius)
    }

    /// World-space rounded rectangle of a node, as drawn.
    pub fn rounded_rect(&self, id: NodeId) -> Option<RoundedRect> {
        self.nodes
            .get(id.idx())
            .map(|n| RoundedRect::from_rect(n.rect, n.radius))
    }

    /// The area children must stay inside: the node's rectangle minus the
    /// title band at the top and the padding on the right and bottom.
    ///
    /// This is the same margin [`Tree::min_size_of`] reserves, so a child that
    /// fits here never leaves its parent below its minimum size.
    pub fn content_rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id.idx()).map(|n| {
            let pad = self.config.padding;
            let top = (n.rect.y0 + self.config.title_band).min(n.rect.y1);
            let right = (n.rect.x1 - pad).max(n.rect.x0);
            let bottom = (n.rect.y1 - pad).max(top);
            Rect::new(n.rect.x0, top, right, bottom)
        })
    }

    /// Flags of a node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.nodes.get(id.idx()).map(|n| n.flags)
    }

    /// The node's own visibility flag. Says nothing about its ancestors; see
    /// [`Tree::is_rendered`].
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.flags(id)
            .is_some_and(|f| f.contains(NodeFlags::VISIBLE))
    }

    /// Returns `true` if the node is hover-highlighted.
    pub fn is_hovered(&self, id: NodeId) -> bool {
        self.flags(id).is_some_and(|f| f.contains(NodeFlags::HOVER))
    }

    /// Returns `true` if the node and all of its ancestors are visible.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        self.contains(id)
            && self.is_visible(id)
            && self.ancestors(id).all(|a| self.is_visible(a))
    }

    /// Returns the parent of a node, or `None` for roots.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|n| n.parent)
    }

    /// Get the children of a node, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.idx())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate the proper ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent_of(id),
        }
    }

    /// Iterate all nodes in depth-first pre-order, roots in z-order.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            next: self.roots.first().copied(),
        }
    }

    /// Get the next node in depth-first traversal order.
    ///
    /// After the last node of a root's subtree, traversal continues with the
    /// next root. Returns `None` at the very end; it does not wrap around.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.contains(current) {
            return None;
        }
        if let Some(&first_child) = self.node(current).children.first() {
            return Some(first_child);
        }
        let mut node = current;
        loop {
            if let Some(next) = self.next_sibling(node) {
                return Some(next);
            }
            node = self.parent_of(node)?;
        }
    }

    /// Get the previous node in depth-first traversal order.
    ///
    /// Returns `None` at the first root; it does not wrap around.
    pub fn prev_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.contains(current) {
            return None;
        }
        if let Some(prev) = self.prev_sibling(current) {
            return Some(self.last_in_subtree(prev));
        }
        self.parent_of(current)
    }

    /// Recompute every parent link from the children lists.
    pub(crate) fn relink_parents(&mut self) {
        for node in &mut self.nodes {
            node.parent = None;
        }
        for i in 0..self.nodes.len() {
            for c in 0..self.nodes[i].children.len() {
                let child = self.nodes[i].children[c];
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId indices are 32-bit; a tree never holds more than u32::MAX nodes."
                )]
                let parent = NodeId::new(i as u32);
                self.node_mut(child).parent = Some(parent);
            }
        }
    }

    /// Translate a node and all of its descendants.
    pub(crate) fn translate_subtree(&mut self, id: NodeId, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            let node = self.node_mut(n);
            node.rect = node.rect + delta;
            stack.extend_from_slice(&node.children);
        }
    }

    pub(crate) fn set_flag(&mut self, id: NodeId, flag: NodeFlags, on: bool) -> bool {
        let node = self.node_mut(id);
        let before = node.flags;
        node.flags.set(flag, on);
        before != node.flags
    }

    /// Ids in post-order: every node after all of its descendants.
    pub(crate) fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(NodeId, bool)> = self.roots.iter().rev().map(|&r| (r, false)).collect();
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
            } else {
                stack.push((id, true));
                stack.extend(self.node(id).children.iter().rev().map(|&c| (c, false)));
            }
        }
        order
    }

    /// Access a node; panics if `id` is not from this tree.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.idx()).expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is not from this tree.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id.idx()).expect("dangling NodeId")
    }

    fn siblings(&self, node: NodeId) -> &[NodeId] {
        match self.parent_of(node) {
            Some(parent) => &self.node(parent).children,
            None => &self.roots,
        }
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.siblings(node);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.siblings(node);
        let pos = siblings.iter().position(|&id| id == node)?;
        pos.checked_sub(1).and_then(|p| siblings.get(p).copied())
    }

    fn last_in_subtree(&self, mut node: NodeId) -> NodeId {
        while let Some(&last) = self.node(node).children.last() {
            node = last;
        }
        node
    }
}

fn check_finite(desc: &NodeDesc) -> Result<(), LoadError> {
    let finite = desc.origin.is_finite()
        && desc.width.is_none_or(f64::is_finite)
        && desc.height.is_none_or(f64::is_finite)
        && desc.radius.is_none_or(f64::is_finite);
    if finite {
        Ok(())
    } else {
        Err(LoadError::NonFiniteGeometry(desc.key))
    }
}

/// Iterator over a node's ancestors. See [`Tree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}

/// Pre-order iterator over a whole tree. See [`Tree::depth_first`].
#[derive(Clone, Debug)]
pub struct DepthFirst<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_depth_first(current);
        Some(current)
    }
}
