// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric routes between two nodes.

use canopy_geom::{BorderPoint, nearest_side};
use canopy_tree::{NodeId, Tree};
use kurbo::{Line, Point};
use smallvec::SmallVec;

/// How an edge's path is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteMode {
    /// A single segment between the two rounded borders, along the line
    /// joining the node centres.
    #[default]
    Straight,
    /// Axis-aligned segments between edge midpoints.
    Orthogonal,
}

/// A world-space polyline between two nodes.
///
/// Routes are only built by [`route_between`] and always hold at least two
/// vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Node the route starts at.
    pub from: NodeId,
    /// Node the route ends at.
    pub to: NodeId,
    points: SmallVec<[Point; 4]>,
}

impl Route {
    /// Polyline vertices, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First vertex.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last vertex.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The route's segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.segments().map(|l| (l.p1 - l.p0).hypot()).sum()
    }
}

/// Compute the route between two nodes of `tree`.
///
/// Returns `None` if either id is unknown or both name the same node.
pub fn route_between(tree: &Tree, from: NodeId, to: NodeId, mode: RouteMode) -> Option<Route> {
    if from == to {
        return None;
    }
    let a = tree.rounded_rect(from)?;
    let b = tree.rounded_rect(to)?;

    let points = match mode {
        RouteMode::Straight => {
            let start = a.border_toward(b.center());
            let end = b.border_toward(a.center());
            SmallVec::from_slice(&[start, end])
        }
        RouteMode::Orthogonal => orthogonal(a.rect(), b.rect()),
    };
    Some(Route { from, to, points })
}

/// Leave `a` through the edge midpoint nearest `b`'s centre, enter `b`
/// through the edge midpoint nearest that exit, and join the two with
/// right-angle bends on the midline between them.
fn orthogonal(a: kurbo::Rect, b: kurbo::Rect) -> SmallVec<[Point; 4]> {
    let start_side = nearest_side(a, b.center());
    let start = start_side.midpoint(a);
    let end = nearest_side(b, start).midpoint(b);

    let mut points: SmallVec<[Point; 4]> = SmallVec::new();
    points.push(start);
    if start_side.is_vertical() {
        let mid_x = (start.x + end.x) / 2.0;
        points.push(Point::new(mid_x, start.y));
        points.push(Point::new(mid_x, end.y));
    } else {
        let mid_y = (start.y + end.y) / 2.0;
        points.push(Point::new(start.x, mid_y));
        points.push(Point::new(end.x, mid_y));
    }
    points.push(end);
    points.dedup();
    if points.len() == 1 {
        points.push(end);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_geom::Side;
    use canopy_tree::{LayoutConfig, LayoutMode, NodeDesc, NodeKey};
    use kurbo::Rect;

    fn pair(a: (f64, f64), b: (f64, f64)) -> (Tree, NodeId, NodeId) {
        let tree = Tree::from_desc(
            &[
                NodeDesc::new(NodeKey(1), "a", a).with_size(100.0, 50.0),
                NodeDesc::new(NodeKey(2), "b", b).with_size(100.0, 50.0),
            ],
            LayoutConfig::default(),
            LayoutMode::Preserve,
        )
        .unwrap();
        let ia = tree.find(NodeKey(1)).unwrap();
        let ib = tree.find(NodeKey(2)).unwrap();
        (tree, ia, ib)
    }

    #[test]
    fn straight_aligned_horizontally() {
        let (tree, a, b) = pair((0.0, 0.0), (300.0, 0.0));
        let route = route_between(&tree, a, b, RouteMode::Straight).unwrap();
        assert_eq!(route.start(), Point::new(100.0, 25.0));
        assert_eq!(route.end(), Point::new(300.0, 25.0));
        assert_eq!(route.length(), 200.0);
    }

    #[test]
    fn straight_aligned_vertically() {
        let (tree, a, b) = pair((0.0, 0.0), (0.0, 200.0));
        let route = route_between(&tree, a, b, RouteMode::Straight).unwrap();
        assert_eq!(route.start(), Point::new(50.0, 50.0));
        assert_eq!(route.end(), Point::new(50.0, 200.0));
    }

    #[test]
    fn straight_diagonal_lands_on_corner_arcs() {
        // The centre-to-centre line passes exactly through a's bottom-right
        // corner, which is rounded with the leaf radius of 5.
        let (tree, a, b) = pair((0.0, 0.0), (200.0, 100.0));
        let route = route_between(&tree, a, b, RouteMode::Straight).unwrap();
        let arc = Point::new(95.0, 45.0);
        assert!(((route.start() - arc).hypot() - 5.0).abs() < 1e-9);
        let d = 5.0 / 2.0_f64.sqrt();
        assert!((route.start() - Point::new(95.0 + d, 45.0 + d)).hypot() < 1e-9);
        // Symmetric on the other end, at b's top-left arc.
        let arc = Point::new(205.0, 105.0);
        assert!((route.end() - Point::new(205.0 - d, 105.0 - d)).hypot() < 1e-9);
        assert!(((route.end() - arc).hypot() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_side_by_side() {
        let (tree, a, b) = pair((0.0, 0.0), (300.0, 100.0));
        let route = route_between(&tree, a, b, RouteMode::Orthogonal).unwrap();
        assert_eq!(
            route.points(),
            &[
                Point::new(100.0, 25.0),
                Point::new(200.0, 25.0),
                Point::new(200.0, 125.0),
                Point::new(300.0, 125.0),
            ]
        );
        assert!(route.segments().all(|l| l.p0.x == l.p1.x || l.p0.y == l.p1.y));
    }

    #[test]
    fn orthogonal_stacked_uses_horizontal_midline() {
        let (tree, a, b) = pair((0.0, 0.0), (10.0, 300.0));
        let ra = tree.rect(a).unwrap();
        let rb = tree.rect(b).unwrap();
        assert_eq!(nearest_side(ra, rb.center()), Side::Bottom);
        let route = route_between(&tree, a, b, RouteMode::Orthogonal).unwrap();
        assert_eq!(
            route.points(),
            &[
                Point::new(50.0, 50.0),
                Point::new(50.0, 175.0),
                Point::new(60.0, 175.0),
                Point::new(60.0, 300.0),
            ]
        );
    }

    #[test]
    fn orthogonal_collapses_straight_runs() {
        let (tree, a, b) = pair((0.0, 0.0), (300.0, 0.0));
        let route = route_between(&tree, a, b, RouteMode::Orthogonal).unwrap();
        assert_eq!(
            route.points(),
            &[Point::new(100.0, 25.0), Point::new(200.0, 25.0), Point::new(300.0, 25.0)]
        );
    }

    #[test]
    fn every_route_has_two_ends() {
        let (tree, a, b) = pair((0.0, 0.0), (300.0, 0.0));
        for mode in [RouteMode::Straight, RouteMode::Orthogonal] {
            let route = route_between(&tree, a, b, mode).unwrap();
            assert!(route.points().len() >= 2);
            assert_eq!(route.start(), route.points()[0]);
            assert_eq!(route.end(), *route.points().last().unwrap());
            assert_eq!(route.segments().count(), route.points().len() - 1);
        }
    }

    #[test]
    fn same_node_has_no_route() {
        let (tree, a, _) = pair((0.0, 0.0), (300.0, 0.0));
        assert!(route_between(&tree, a, a, RouteMode::Straight).is_none());
    }

    #[test]
    fn overlapping_centres_do_not_divide_by_zero() {
        let (tree, a, b) = pair((0.0, 0.0), (0.0, 0.0));
        let route = route_between(&tree, a, b, RouteMode::Straight).unwrap();
        assert!(route.points().iter().all(|p| p.is_finite()));
        assert_eq!(route.start(), Rect::new(0.0, 0.0, 100.0, 50.0).center());
    }
}
