// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the tree invariants that interactive mutation must
//! preserve:
//!
//! 1. Containment: every non-root node lies inside its parent's content area.
//! 2. Minimum size: every node is at least the configured minimum and at
//!    least as large as its children's extent plus padding.
//! 3. Visibility round-trip: hide then show restores every flag.

use canopy_tree::{
    LayoutConfig, LayoutMode, NodeDesc, NodeId, NodeKey, Tree, VisibilityStacks,
};
use kurbo::Vec2;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// ── Helpers ─────────────────────────────────────────────────────────────

const NODES: usize = 8;

/// Two roots; the first holds a nested group and a leaf, the second a
/// three-level chain whose middle node can grow into its parent's corner.
fn diagram() -> Tree {
    let group = NodeDesc::new(NodeKey(2), "group", (120.0, 130.0))
        .with_size(180.0, 120.0)
        .with_children([
            NodeDesc::new(NodeKey(4), "a", (130.0, 160.0)).with_size(50.0, 40.0),
            NodeDesc::new(NodeKey(5), "b", (200.0, 160.0)).with_size(60.0, 60.0),
        ]);
    let root = NodeDesc::new(NodeKey(1), "root", (100.0, 100.0))
        .with_size(400.0, 300.0)
        .with_children([group, NodeDesc::new(NodeKey(3), "leaf", (350.0, 150.0))]);
    let other = NodeDesc::new(NodeKey(6), "other", (600.0, 100.0))
        .with_size(200.0, 200.0)
        .with_child(
            NodeDesc::new(NodeKey(7), "inner", (620.0, 130.0))
                .with_size(100.0, 80.0)
                .with_child(NodeDesc::new(NodeKey(8), "deep", (630.0, 160.0))),
        );
    Tree::from_desc(
        &[root, other],
        LayoutConfig::default(),
        LayoutMode::Preserve,
    )
    .unwrap()
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Move(usize, Vec2),
    Resize(usize, Vec2),
}

fn delta() -> impl Strategy<Value = Vec2> {
    (-400.0..400.0_f64, -400.0..400.0_f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NODES, delta()).prop_map(|(i, d)| Op::Move(i, d)),
        (0..NODES, delta()).prop_map(|(i, d)| Op::Resize(i, d)),
    ]
}

fn nth(tree: &Tree, i: usize) -> NodeId {
    tree.ids().nth(i).unwrap()
}

fn check_invariants(tree: &Tree) -> Result<(), TestCaseError> {
    let cfg = *tree.config();
    for id in tree.ids() {
        let rect = tree.rect(id).unwrap();
        prop_assert!(rect.width() >= cfg.min_width - EPS, "{rect:?} too narrow");
        prop_assert!(rect.height() >= cfg.min_height - EPS, "{rect:?} too short");
        let min = tree.min_size_of(id);
        prop_assert!(rect.width() >= min.width - EPS, "{rect:?} narrower than {min:?}");
        prop_assert!(rect.height() >= min.height - EPS, "{rect:?} shorter than {min:?}");
        if let Some(parent) = tree.parent_of(id) {
            let content = tree.content_rect(parent).unwrap();
            prop_assert!(rect.x0 >= content.x0 - EPS, "{rect:?} left of {content:?}");
            prop_assert!(rect.y0 >= content.y0 - EPS, "{rect:?} above {content:?}");
            prop_assert!(rect.x1 <= content.x1 + EPS, "{rect:?} right of {content:?}");
            prop_assert!(rect.y1 <= content.y1 + EPS, "{rect:?} below {content:?}");
        }
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Containment and minimum size under arbitrary drags
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mutations_preserve_containment(ops in proptest::collection::vec(op(), 1..60)) {
        let mut tree = diagram();
        prop_assert_eq!(tree.len(), NODES);
        check_invariants(&tree)?;
        for op in ops {
            match op {
                Op::Move(i, d) => {
                    let id = nth(&tree, i);
                    tree.move_by(id, d);
                }
                Op::Resize(i, d) => {
                    let id = nth(&tree, i);
                    let min = tree.min_size_of(id);
                    let size = tree.resize_by(id, d);
                    prop_assert!(size.width >= min.width - EPS);
                    prop_assert!(size.height >= min.height - EPS);
                }
            }
            check_invariants(&tree)?;
        }
    }

    #[test]
    fn move_keeps_relative_offsets(i in 0..NODES, d in delta()) {
        let mut tree = diagram();
        let id = nth(&tree, i);
        let origin = tree.rect(id).unwrap().origin();
        let offsets: Vec<Vec2> = tree
            .children_of(id)
            .iter()
            .map(|&c| tree.rect(c).unwrap().origin() - origin)
            .collect();
        tree.move_by(id, d);
        let origin = tree.rect(id).unwrap().origin();
        for (&c, offset) in tree.children_of(id).iter().zip(offsets) {
            let now = tree.rect(c).unwrap().origin() - origin;
            prop_assert!((now - offset).hypot() < EPS);
        }
    }

    // ═════════════════════════════════════════════════════════════════════
    // 3. Visibility round-trip
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn hide_then_show_restores_flags(
        pre in proptest::collection::vec((0..NODES, any::<bool>()), 0..6),
        target in 0..NODES,
    ) {
        let mut tree = diagram();
        let mut stacks = VisibilityStacks::new();
        for (i, desired) in pre {
            let id = nth(&tree, i);
            stacks.toggle(&mut tree, id, Some(desired));
        }
        let before: Vec<bool> = tree.ids().map(|id| tree.is_visible(id)).collect();

        let id = nth(&tree, target);
        let hid = stacks.toggle(&mut tree, id, Some(false));
        stacks.toggle(&mut tree, id, Some(true));
        let after: Vec<bool> = tree.ids().map(|id| tree.is_visible(id)).collect();
        prop_assert_eq!(before, after, "outcome of hide: {:?}", hid);
    }
}
