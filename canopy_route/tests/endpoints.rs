// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge endpoints follow visibility changes and routes stay on node borders.

use canopy_route::{Edges, RouteMode, resolve_display_endpoint};
use canopy_tree::{
    EdgeDesc, LayoutConfig, LayoutMode, NodeDesc, NodeKey, Tree, VisibilityStacks,
};
use kurbo::{Point, Rect};

/// Two services with nested handlers, calling across.
fn services() -> (Tree, Vec<EdgeDesc>) {
    let left = NodeDesc::new(NodeKey(1), "orders", (0.0, 0.0))
        .with_size(200.0, 150.0)
        .with_children([
            NodeDesc::new(NodeKey(11), "create", (10.0, 30.0)).with_size(80.0, 40.0),
            NodeDesc::new(NodeKey(12), "cancel", (100.0, 30.0)).with_size(80.0, 40.0),
        ]);
    let right = NodeDesc::new(NodeKey(2), "billing", (400.0, 200.0))
        .with_size(200.0, 150.0)
        .with_child(NodeDesc::new(NodeKey(21), "charge", (420.0, 230.0)).with_size(80.0, 40.0));
    let tree = Tree::from_desc(&[left, right], LayoutConfig::default(), LayoutMode::Preserve)
        .unwrap();
    let edges = vec![
        EdgeDesc::new(NodeKey(11), NodeKey(21), "CALLS"),
        EdgeDesc::new(NodeKey(12), NodeKey(21), "CALLS"),
        EdgeDesc::new(NodeKey(11), NodeKey(404), "CALLS"),
    ];
    (tree, edges)
}

/// Within `eps` of the rectangle and outside its interior shrunk by more
/// than any corner radius used here.
fn on_border(rect: Rect, p: Point) -> bool {
    let eps = 1e-9;
    rect.inflate(eps, eps).contains(p) && !rect.inflate(-5.0, -5.0).contains(p)
}

#[test]
fn hidden_endpoint_resolves_to_visible_ancestor() {
    let (mut tree, descs) = services();
    let mut stacks = VisibilityStacks::new();
    let mut edges = Edges::resolved(&descs, &tree);
    let orders = tree.find(NodeKey(1)).unwrap();
    let create = tree.find(NodeKey(11)).unwrap();

    assert_eq!(resolve_display_endpoint(&tree, NodeKey(11)), Some(create));
    assert_eq!(edges.routes(&tree, RouteMode::Straight).count(), 2);

    stacks.toggle(&mut tree, orders, None);
    edges.resolve(&tree);
    assert_eq!(resolve_display_endpoint(&tree, NodeKey(11)), Some(orders));
    let froms: Vec<_> = edges
        .routes(&tree, RouteMode::Straight)
        .map(|(_, r)| r.from)
        .collect();
    assert_eq!(froms, vec![orders, orders]);

    stacks.toggle(&mut tree, orders, None);
    edges.resolve(&tree);
    let froms: Vec<_> = edges
        .routes(&tree, RouteMode::Straight)
        .map(|(_, r)| r.from)
        .collect();
    assert_eq!(froms, vec![create, tree.find(NodeKey(12)).unwrap()]);
}

#[test]
fn dangling_edges_are_kept_but_not_routed() {
    let (tree, descs) = services();
    let edges = Edges::resolved(&descs, &tree);
    assert_eq!(edges.len(), 3);
    let dangling = edges.iter().nth(2).unwrap();
    assert!(dangling.display_from().is_some());
    assert!(dangling.display_to().is_none());
    assert!(dangling.display_endpoints().is_none());
}

#[test]
fn routes_start_and_end_on_borders() {
    let (tree, descs) = services();
    let edges = Edges::resolved(&descs, &tree);
    for mode in [RouteMode::Straight, RouteMode::Orthogonal] {
        for (_, route) in edges.routes(&tree, mode) {
            let from = tree.rect(route.from).unwrap();
            let to = tree.rect(route.to).unwrap();
            assert!(on_border(from, route.start()), "{mode:?} start {:?}", route.start());
            assert!(on_border(to, route.end()), "{mode:?} end {:?}", route.end());
            assert!(route.points().len() >= 2);
        }
    }
}
