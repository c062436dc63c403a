// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node tree: identifiers, keys and flags.

use core::fmt;

/// Dense handle of a node inside a [`Tree`](crate::Tree).
///
/// Nodes are never created or destroyed after load, so unlike a generational
/// handle this is a plain index into the tree's arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Caller-facing identity of a node, as given in the diagram description.
///
/// Edges and external callers refer to nodes by key; the tree maps keys to
/// [`NodeId`]s at load time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for NodeKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

bitflags::bitflags! {
    /// Per-node state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The node's own visibility. A node is only rendered if it and all
        /// of its ancestors carry this flag.
        const VISIBLE = 0b0000_0001;
        /// Transient hover highlight, recomputed on pointer motion.
        const HOVER   = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}
