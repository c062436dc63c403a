// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static startup descriptions of a diagram.
//!
//! A diagram is described once, either nested ([`DiagramDesc`]) or as a flat
//! node list with containment relations ([`FlatDiagram`]), and then loaded
//! into a [`Tree`](crate::Tree). Nothing here is persisted; these are plain
//! values the host builds however it likes.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;

use crate::{LoadError, NodeKey};

/// Nested description of one node and its subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDesc {
    /// Caller-facing identity. Must be unique within the diagram.
    pub key: NodeKey,
    /// Display label.
    pub label: String,
    /// World-space top-left corner.
    pub origin: Point,
    /// Explicit width; the configured minimum is used when absent.
    pub width: Option<f64>,
    /// Explicit height; the configured minimum is used when absent.
    pub height: Option<f64>,
    /// Explicit corner radius; a default based on whether the node has
    /// children is used when absent.
    pub radius: Option<f64>,
    /// Children in z-order (later entries are drawn on top).
    pub children: Vec<NodeDesc>,
}

impl NodeDesc {
    /// Create a leaf description at `origin`.
    pub fn new(key: NodeKey, label: impl Into<String>, origin: impl Into<Point>) -> Self {
        Self {
            key,
            label: label.into(),
            origin: origin.into(),
            width: None,
            height: None,
            radius: None,
            children: Vec::new(),
        }
    }

    /// Set an explicit size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set an explicit corner radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A directed relation between two nodes, rendered as a routed edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeDesc {
    /// Source node.
    pub from: NodeKey,
    /// Target node.
    pub to: NodeKey,
    /// Free-form relation tag, e.g. `"CALLS"`.
    pub kind: String,
}

impl EdgeDesc {
    /// Create an edge description.
    pub fn new(from: NodeKey, to: NodeKey, kind: impl Into<String>) -> Self {
        Self {
            from,
            to,
            kind: kind.into(),
        }
    }
}

/// Nested description of a whole diagram.
///
/// Edge endpoints are not validated: an edge naming a key that no node has is
/// kept and simply never drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramDesc {
    /// Root nodes in z-order.
    pub nodes: Vec<NodeDesc>,
    /// Edges between any two nodes of the diagram.
    pub edges: Vec<EdgeDesc>,
}

/// One node of a [`FlatDiagram`], without its children.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatNode {
    /// Caller-facing identity.
    pub key: NodeKey,
    /// Display label.
    pub label: String,
    /// World-space top-left corner.
    pub origin: Point,
    /// Explicit width.
    pub width: Option<f64>,
    /// Explicit height.
    pub height: Option<f64>,
    /// Explicit corner radius.
    pub radius: Option<f64>,
}

impl FlatNode {
    /// Create a flat node at `origin`.
    pub fn new(key: NodeKey, label: impl Into<String>, origin: impl Into<Point>) -> Self {
        Self {
            key,
            label: label.into(),
            origin: origin.into(),
            width: None,
            height: None,
            radius: None,
        }
    }

    /// Give the node an explicit size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Give the node an explicit corner radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    fn into_desc(self, children: Vec<NodeDesc>) -> NodeDesc {
        NodeDesc {
            key: self.key,
            label: self.label,
            origin: self.origin,
            width: self.width,
            height: self.height,
            radius: self.radius,
            children,
        }
    }
}

/// A diagram as a graph export: a node list, `(parent, child)` containment
/// relations and edges.
///
/// Roots are the nodes that are nobody's child, kept in node-list order.
/// Children are kept in relation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatDiagram {
    /// All nodes, in any order.
    pub nodes: Vec<FlatNode>,
    /// `(parent, child)` pairs.
    pub contains: Vec<(NodeKey, NodeKey)>,
    /// Edges between nodes.
    pub edges: Vec<EdgeDesc>,
}

impl FlatDiagram {
    /// Assemble the nested description.
    ///
    /// Fails with [`LoadError::DuplicateKey`] if two nodes share a key,
    /// [`LoadError::UnknownKey`] if a relation names a missing node,
    /// [`LoadError::MultipleParents`] if a node is contained twice, and
    /// [`LoadError::Cycle`] if some node cannot be reached from a root.
    /// Repeating the same relation is harmless.
    pub fn into_nested(self) -> Result<DiagramDesc, LoadError> {
        let mut index: HashMap<NodeKey, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(node.key, i).is_some() {
                return Err(LoadError::DuplicateKey(node.key));
            }
        }

        let mut parent_of: Vec<Option<usize>> = alloc::vec![None; self.nodes.len()];
        let mut children: Vec<Vec<usize>> = alloc::vec![Vec::new(); self.nodes.len()];
        for &(parent, child) in &self.contains {
            let p = *index.get(&parent).ok_or(LoadError::UnknownKey(parent))?;
            let c = *index.get(&child).ok_or(LoadError::UnknownKey(child))?;
            if p == c {
                return Err(LoadError::Cycle(child));
            }
            match parent_of[c] {
                Some(existing) if existing == p => continue,
                Some(existing) => {
                    return Err(LoadError::MultipleParents {
                        child,
                        first: self.nodes[existing].key,
                        second: parent,
                    });
                }
                None => {
                    parent_of[c] = Some(p);
                    children[p].push(c);
                }
            }
        }

        let roots: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| parent_of[i].is_none())
            .collect();

        // Post-order over everything reachable from a root. Every node has at
        // most one parent, so each is visited at most once.
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
        while let Some((i, expanded)) = stack.pop() {
            if expanded {
                order.push(i);
            } else {
                stack.push((i, true));
                stack.extend(children[i].iter().rev().map(|&c| (c, false)));
            }
        }
        if order.len() != self.nodes.len() {
            let mut seen = alloc::vec![false; self.nodes.len()];
            for &i in &order {
                seen[i] = true;
            }
            let stray = seen.iter().position(|s| !s).unwrap_or_default();
            return Err(LoadError::Cycle(self.nodes[stray].key));
        }

        let mut flat: Vec<Option<FlatNode>> = self.nodes.into_iter().map(Some).collect();
        let mut built: Vec<Option<NodeDesc>> = alloc::vec![None; flat.len()];
        for i in order {
            let kids = children[i]
                .iter()
                .filter_map(|&c| built[c].take())
                .collect();
            if let Some(node) = flat[i].take() {
                built[i] = Some(node.into_desc(kids));
            }
        }

        Ok(DiagramDesc {
            nodes: roots.iter().filter_map(|&r| built[r].take()).collect(),
            edges: self.edges,
        })
    }
}
