// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edges and visibility-aware display endpoints.

use alloc::string::String;
use alloc::vec::Vec;

use canopy_tree::{EdgeDesc, NodeId, NodeKey, Tree};

use crate::route::{Route, RouteMode, route_between};

/// Resolve the node an edge end is drawn at.
///
/// This is the deepest ancestor-or-self of `key` whose whole path from the
/// root is visible: walking up from the node, every hidden node moves the
/// endpoint to its parent. Returns `None` if the key is unknown or the
/// node's root itself is hidden.
pub fn resolve_display_endpoint(tree: &Tree, key: NodeKey) -> Option<NodeId> {
    let id = tree.find(key)?;
    let mut candidate = Some(id);
    let mut current = Some(id);
    while let Some(node) = current {
        let parent = tree.parent_of(node);
        if !tree.is_visible(node) {
            candidate = parent;
        }
        current = parent;
    }
    candidate
}

/// A relation between two nodes plus its resolved display endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Source node key.
    pub from: NodeKey,
    /// Target node key.
    pub to: NodeKey,
    /// Relation tag.
    pub kind: String,
    display_from: Option<NodeId>,
    display_to: Option<NodeId>,
}

impl Edge {
    /// Create an unresolved edge.
    pub fn new(from: NodeKey, to: NodeKey, kind: impl Into<String>) -> Self {
        Self {
            from,
            to,
            kind: kind.into(),
            display_from: None,
            display_to: None,
        }
    }

    /// The node the source end is drawn at, as of the last resolve.
    pub fn display_from(&self) -> Option<NodeId> {
        self.display_from
    }

    /// The node the target end is drawn at, as of the last resolve.
    pub fn display_to(&self) -> Option<NodeId> {
        self.display_to
    }

    /// Both display endpoints, if the edge is drawable.
    ///
    /// An edge is not drawn when an endpoint is unresolved or when both ends
    /// collapse onto the same visible node.
    pub fn display_endpoints(&self) -> Option<(NodeId, NodeId)> {
        match (self.display_from, self.display_to) {
            (Some(a), Some(b)) if a != b => Some((a, b)),
            _ => None,
        }
    }

    /// Recompute the display endpoints against `tree`.
    pub fn resolve(&mut self, tree: &Tree) {
        self.display_from = resolve_display_endpoint(tree, self.from);
        self.display_to = resolve_display_endpoint(tree, self.to);

        #[cfg(feature = "tracing")]
        if self.display_from.is_none() || self.display_to.is_none() {
            tracing::trace!(from = %self.from, to = %self.to, kind = %self.kind, "edge unresolved");
        }
    }
}

impl From<&EdgeDesc> for Edge {
    fn from(desc: &EdgeDesc) -> Self {
        Self::new(desc.from, desc.to, desc.kind.clone())
    }
}

/// The edge list of a diagram.
///
/// Edges never own nodes and tolerate dangling keys: an edge whose endpoint
/// cannot be resolved is simply skipped by [`Edges::routes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    edges: Vec<Edge>,
}

impl Edges {
    /// Build unresolved edges from their descriptions.
    pub fn from_desc(descs: &[EdgeDesc]) -> Self {
        Self {
            edges: descs.iter().map(Edge::from).collect(),
        }
    }

    /// Build edges from descriptions and resolve them against `tree`.
    pub fn resolved(descs: &[EdgeDesc], tree: &Tree) -> Self {
        let mut edges = Self::from_desc(descs);
        edges.resolve(tree);
        edges
    }

    /// Recompute every edge's display endpoints. Call after any visibility
    /// change.
    pub fn resolve(&mut self, tree: &Tree) {
        for edge in &mut self.edges {
            edge.resolve(tree);
        }
    }

    /// Number of edges, drawable or not.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate all edges.
    pub fn iter(&self) -> core::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Route every drawable edge between its display endpoints.
    pub fn routes<'a>(
        &'a self,
        tree: &'a Tree,
        mode: RouteMode,
    ) -> impl Iterator<Item = (&'a Edge, Route)> + 'a {
        self.edges.iter().filter_map(move |edge| {
            let (a, b) = edge.display_endpoints()?;
            route_between(tree, a, b, mode).map(|route| (edge, route))
        })
    }
}

impl<'a> IntoIterator for &'a Edges {
    type Item = &'a Edge;
    type IntoIter = core::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
