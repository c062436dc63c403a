// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascading show/hide of a node's children with per-node snapshot stacks.

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::Tree;
use crate::types::{NodeFlags, NodeId};

/// Child visibility at the time of one hide: `(child, was_visible)`.
type Snapshot = SmallVec<[(NodeId, bool); 4]>;

/// What a [`VisibilityStacks::toggle`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleOutcome {
    /// The node has no children; nothing changed.
    NoChildren,
    /// The children were hidden and a snapshot was saved.
    Hidden,
    /// The most recent snapshot was restored.
    Shown,
    /// A show was requested with no saved snapshot; nothing changed.
    Underflow,
}

impl ToggleOutcome {
    /// Returns `true` if any visibility flag may have changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Hidden | Self::Shown)
    }
}

/// Saved child-visibility snapshots, one stack per node.
///
/// Hiding a node's children pushes a snapshot onto that node's stack and
/// cascades into every child that was visible. Showing pops the snapshot,
/// restores each child's flag and, for every child restored to visible,
/// restores its own subtree from its own stack. Hiding and then showing
/// therefore reproduces every descendant's visibility exactly.
///
/// The stacks are keyed by [`NodeId`] and must only be used with the tree
/// they were filled from.
#[derive(Clone, Debug, Default)]
pub struct VisibilityStacks {
    stacks: HashMap<NodeId, Vec<Snapshot>>,
}

impl VisibilityStacks {
    /// Create empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots saved for `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.stacks.get(&id).map_or(0, Vec::len)
    }

    /// Drop every saved snapshot.
    pub fn clear(&mut self) {
        self.stacks.clear();
    }

    /// Show or hide the children of `id`.
    ///
    /// With `desired` omitted the first child's visibility decides: if it is
    /// visible the children are hidden, otherwise they are shown. Showing
    /// with an empty stack leaves the children as they are and reports
    /// [`ToggleOutcome::Underflow`].
    pub fn toggle(&mut self, tree: &mut Tree, id: NodeId, desired: Option<bool>) -> ToggleOutcome {
        let Some(&first) = tree.children_of(id).first() else {
            return ToggleOutcome::NoChildren;
        };
        let show = desired.unwrap_or_else(|| !tree.is_visible(first));
        let outcome = if show {
            self.show(tree, id)
        } else {
            self.hide(tree, id);
            ToggleOutcome::Hidden
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            node = %tree.node(id).key,
            ?outcome,
            depth = self.depth(id),
            "visibility toggled"
        );
        outcome
    }

    fn hide(&mut self, tree: &mut Tree, id: NodeId) {
        let mut work = alloc::vec![id];
        while let Some(n) = work.pop() {
            let snapshot: Snapshot = tree
                .children_of(n)
                .iter()
                .map(|&c| (c, tree.is_visible(c)))
                .collect();
            for &(c, was_visible) in &snapshot {
                if was_visible {
                    tree.set_flag(c, NodeFlags::VISIBLE, false);
                    if !tree.children_of(c).is_empty() {
                        work.push(c);
                    }
                }
            }
            self.stacks.entry(n).or_default().push(snapshot);
        }
    }

    fn show(&mut self, tree: &mut Tree, id: NodeId) -> ToggleOutcome {
        let Some(snapshot) = self.pop(id) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(node = %tree.node(id).key, "show with empty visibility stack");
            return ToggleOutcome::Underflow;
        };
        let mut work = alloc::vec![snapshot];
        while let Some(snapshot) = work.pop() {
            for (c, was_visible) in snapshot {
                tree.set_flag(c, NodeFlags::VISIBLE, was_visible);
                if was_visible && let Some(inner) = self.pop(c) {
                    work.push(inner);
                }
            }
        }
        ToggleOutcome::Shown
    }

    fn pop(&mut self, id: NodeId) -> Option<Snapshot> {
        let stack = self.stacks.get_mut(&id)?;
        let snapshot = stack.pop();
        if stack.is_empty() {
            self.stacks.remove(&id);
        }
        snapshot
    }
}
