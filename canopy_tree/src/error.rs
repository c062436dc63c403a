// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::NodeKey;

/// Validation failure while loading a diagram description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The same key names more than one node.
    DuplicateKey(NodeKey),
    /// A relation or edge names a key that no node has.
    UnknownKey(NodeKey),
    /// A node is listed as the child of more than one parent.
    MultipleParents {
        /// The node with too many parents.
        child: NodeKey,
        /// The parent it was first attached to.
        first: NodeKey,
        /// The parent that attempted to claim it as well.
        second: NodeKey,
    },
    /// Containment relations form a loop; `key` is one node on it.
    Cycle(NodeKey),
    /// A coordinate or size is NaN or infinite.
    NonFiniteGeometry(NodeKey),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "node key {key} is used more than once"),
            Self::UnknownKey(key) => write!(f, "reference to unknown node {key}"),
            Self::MultipleParents {
                child,
                first,
                second,
            } => write!(
                f,
                "node {child} is contained by both {first} and {second}"
            ),
            Self::Cycle(key) => write!(f, "containment cycle through node {key}"),
            Self::NonFiniteGeometry(key) => {
                write!(f, "node {key} has a non-finite position or size")
            }
        }
    }
}

impl core::error::Error for LoadError {}
