// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios over the public `canopy_tree` API: load, pick, drag,
//! resize and toggle the way an editor session would.

use canopy_tree::{
    EdgeDesc, FlatDiagram, FlatNode, HitZone, LayoutConfig, LayoutMode, LoadError, NodeDesc,
    NodeKey, ToggleOutcome, Tree, VisibilityStacks,
};
use kurbo::{Point, Rect, Size, Vec2};

fn root_and_child() -> Tree {
    let desc = NodeDesc::new(NodeKey(1), "root", (100.0, 100.0))
        .with_size(200.0, 150.0)
        .with_child(NodeDesc::new(NodeKey(2), "child", (120.0, 120.0)).with_size(60.0, 40.0));
    Tree::from_desc(&[desc], LayoutConfig::default(), LayoutMode::Preserve).unwrap()
}

#[test]
fn hide_show_reproduces_child_geometry() {
    let mut tree = root_and_child();
    let mut stacks = VisibilityStacks::new();
    let root = tree.find(NodeKey(1)).unwrap();
    let child = tree.find(NodeKey(2)).unwrap();

    assert_eq!(stacks.toggle(&mut tree, root, None), ToggleOutcome::Hidden);
    // Hidden children cannot be picked; the parent takes the point.
    let hit = tree.find_hit(Point::new(150.0, 140.0)).unwrap();
    assert_eq!(hit.node, root);

    assert_eq!(stacks.toggle(&mut tree, root, None), ToggleOutcome::Shown);
    let rect = tree.rect(child).unwrap();
    assert_eq!(rect.origin(), Point::new(120.0, 120.0));
    assert_eq!(rect.size(), Size::new(60.0, 40.0));
}

#[test]
fn shrinking_parent_stops_at_child_extent() {
    let mut tree = root_and_child();
    let root = tree.find(NodeKey(1)).unwrap();
    let size = tree.resize_by(root, Vec2::new(-1000.0, -1000.0));
    assert!(size.width > 0.0 && size.height > 0.0);
    // Child spans 80 x 60 from the root's origin; padding is 10.
    assert_eq!(size, Size::new(90.0, 70.0));
}

#[test]
fn handle_drag_then_body_drag() {
    let mut tree = root_and_child();
    let root = tree.find(NodeKey(1)).unwrap();

    let hit = tree.find_hit(Point::new(290.0, 240.0)).unwrap();
    assert_eq!(hit.node, root);
    assert_eq!(hit.zone, HitZone::Handle);
    tree.resize_by(hit.node, Vec2::new(50.0, 10.0));
    assert_eq!(tree.rect(root), Some(Rect::new(100.0, 100.0, 350.0, 260.0)));

    // The handle moved with the corner.
    let hit = tree.find_hit(Point::new(340.0, 250.0)).unwrap();
    assert_eq!(hit.zone, HitZone::Handle);
    let hit = tree.find_hit(Point::new(290.0, 240.0)).unwrap();
    assert_eq!(hit.zone, HitZone::Body);
}

#[test]
fn flat_export_loads_like_nested() {
    let flat = FlatDiagram {
        nodes: vec![
            FlatNode::new(NodeKey(20), "child", (120.0, 120.0)),
            FlatNode::new(NodeKey(10), "root", (100.0, 100.0)),
        ],
        contains: vec![(NodeKey(10), NodeKey(20))],
        edges: vec![EdgeDesc::new(NodeKey(20), NodeKey(10), "PART_OF")],
    };
    let nested = flat.into_nested().unwrap();
    assert_eq!(nested.edges.len(), 1);
    let tree = Tree::from_desc(&nested.nodes, LayoutConfig::default(), LayoutMode::Preserve)
        .unwrap();
    let root = tree.find(NodeKey(10)).unwrap();
    let child = tree.find(NodeKey(20)).unwrap();
    assert_eq!(tree.roots(), &[root]);
    assert_eq!(tree.parent_of(child), Some(root));
    // The root grew around its child: 120 + 40 - 100 + 10 wide.
    assert_eq!(tree.rect(root).unwrap().size(), Size::new(70.0, 60.0));
}

#[test]
fn malformed_descriptions_fail_fast() {
    let dup = [
        NodeDesc::new(NodeKey(1), "a", (0.0, 0.0)),
        NodeDesc::new(NodeKey(1), "b", (100.0, 0.0)),
    ];
    let err = Tree::from_desc(&dup, LayoutConfig::default(), LayoutMode::Preserve).unwrap_err();
    assert_eq!(err, LoadError::DuplicateKey(NodeKey(1)));
    assert_eq!(err.to_string(), "node key #1 is used more than once");

    let ring = FlatDiagram {
        nodes: vec![
            FlatNode::new(NodeKey(1), "a", (0.0, 0.0)),
            FlatNode::new(NodeKey(2), "b", (0.0, 0.0)),
        ],
        contains: vec![(NodeKey(1), NodeKey(2)), (NodeKey(2), NodeKey(1))],
        edges: vec![],
    };
    assert!(matches!(ring.into_nested(), Err(LoadError::Cycle(_))));
}

#[test]
fn custom_layout_constants_apply() {
    let config = LayoutConfig::new()
        .with_min_size(20.0, 20.0)
        .with_padding(5.0)
        .with_title_band(15.0);
    let desc = NodeDesc::new(NodeKey(1), "root", (0.0, 0.0)).with_children([
        NodeDesc::new(NodeKey(2), "a", (0.0, 0.0)),
        NodeDesc::new(NodeKey(3), "b", (0.0, 0.0)),
    ]);
    let tree = Tree::from_desc(&[desc], config, LayoutMode::Flow).unwrap();
    let root = tree.find(NodeKey(1)).unwrap();
    // 5 + (20 + 5) * 2 = 55 wide; 15 + 5 + 20 = 40 tall.
    assert_eq!(tree.rect(root), Some(Rect::new(0.0, 0.0, 55.0, 40.0)));
    let b = tree.find(NodeKey(3)).unwrap();
    assert_eq!(tree.rect(b).unwrap().origin(), Point::new(30.0, 15.0));
}

#[test]
fn grandchild_grown_to_the_edge_keeps_its_parent_contained() {
    let desc = NodeDesc::new(NodeKey(1), "r", (0.0, 0.0))
        .with_size(400.0, 300.0)
        .with_child(
            NodeDesc::new(NodeKey(2), "m", (0.0, 20.0))
                .with_size(200.0, 100.0)
                .with_child(NodeDesc::new(NodeKey(3), "l", (10.0, 50.0))),
        );
    let mut tree = Tree::from_desc(&[desc], LayoutConfig::default(), LayoutMode::Preserve)
        .unwrap();
    let r = tree.find(NodeKey(1)).unwrap();
    let m = tree.find(NodeKey(2)).unwrap();
    let l = tree.find(NodeKey(3)).unwrap();

    tree.resize_by(m, Vec2::new(1000.0, 1000.0));
    tree.resize_by(l, Vec2::new(1000.0, 1000.0));
    let grown = tree.rect(m).unwrap();
    let min = tree.min_size_of(m);
    assert!(grown.width() >= min.width && grown.height() >= min.height);

    tree.resize_by(m, Vec2::ZERO);
    let content = tree.content_rect(r).unwrap();
    let rect = tree.rect(m).unwrap();
    assert_eq!(rect, grown);
    assert_eq!(content.union(rect), content, "{rect:?} escapes {content:?}");
}
