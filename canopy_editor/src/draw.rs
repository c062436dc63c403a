// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-list production and the rendering contract.
//!
//! A [`DrawList`] is everything a frame needs, already in screen space:
//! rendered nodes in draw order, each with its label and, when hovered, its
//! resize handle, followed by every drawable edge's route. A renderer only
//! has to implement [`Surface`]; [`DrawList::paint`] issues the calls.

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use canopy_route::{Edges, RouteMode};
use canopy_tree::{NodeId, NodeKey, Tree};
use canopy_view::Viewport;
use kurbo::{Arc, Point, RoundedRect, Size, Stroke, Vec2};
use peniko::Color;
use smallvec::SmallVec;

/// Label font size as a fraction of the title band.
const LABEL_SCALE: f64 = 0.6;

/// A colored stroke.
#[derive(Clone, Debug)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Width, joins, caps and dash pattern.
    pub stroke: Stroke,
}

impl StrokeStyle {
    /// A solid stroke of `width` pixels.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            stroke: Stroke::new(width),
        }
    }

    /// A dashed stroke of `width` pixels.
    pub fn dashed(color: Color, width: f64, dashes: impl IntoIterator<Item = f64>) -> Self {
        Self {
            color,
            stroke: Stroke::new(width).with_dashes(0.0, dashes),
        }
    }
}

/// Colors and strokes used by [`DrawList::paint`].
#[derive(Clone, Debug)]
pub struct Theme {
    /// Canvas fill.
    pub background: Color,
    /// Node outline.
    pub node: StrokeStyle,
    /// Outline of hovered nodes.
    pub hovered_node: StrokeStyle,
    /// Resize handle arc.
    pub handle: StrokeStyle,
    /// Edge polylines.
    pub edge: StrokeStyle,
    /// Label color.
    pub label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            node: StrokeStyle::solid(Color::BLACK, 2.0),
            hovered_node: StrokeStyle::solid(Color::from_rgb8(0x1f, 0x5f, 0xbf), 2.0),
            handle: StrokeStyle::solid(Color::BLACK, 2.0),
            edge: StrokeStyle::solid(Color::BLACK, 2.0),
            label: Color::BLACK,
        }
    }
}

/// The rendering collaborator.
///
/// All coordinates are screen pixels.
pub trait Surface {
    /// Fill the whole canvas.
    fn fill_background(&mut self, size: Size, color: Color);

    /// Stroke a node outline.
    fn stroke_rounded_rect(&mut self, shape: RoundedRect, style: &StrokeStyle);

    /// Stroke a resize-handle arc.
    fn stroke_arc(&mut self, arc: Arc, style: &StrokeStyle);

    /// Draw `text` with its baseline-left corner at `origin`.
    fn text(&mut self, origin: Point, text: &str, size: f64, color: Color);

    /// Stroke an open polyline.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);
}

/// One rendered node.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawNode {
    /// Tree handle.
    pub id: NodeId,
    /// Caller key.
    pub key: NodeKey,
    /// Outline.
    pub shape: RoundedRect,
    /// Label text.
    pub label: String,
    /// Baseline-left corner of the label.
    pub label_origin: Point,
    /// Label font size.
    pub label_size: f64,
    /// Whether the node is on the hovered path.
    pub hovered: bool,
    /// Resize handle, shown while hovered.
    pub handle: Option<Arc>,
}

/// One drawable edge.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawEdge {
    /// Source key as declared.
    pub from: NodeKey,
    /// Target key as declared.
    pub to: NodeKey,
    /// Relation tag.
    pub kind: String,
    /// Route vertices.
    pub points: SmallVec<[Point; 4]>,
}

/// A fully resolved frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    /// Canvas size.
    pub view_size: Size,
    /// Rendered nodes, parents before children.
    pub nodes: Vec<DrawNode>,
    /// Drawable edges.
    pub edges: Vec<DrawEdge>,
}

impl DrawList {
    /// Resolve a frame of `tree` and `edges` as seen through `viewport`.
    pub fn build(tree: &Tree, edges: &Edges, viewport: &Viewport, mode: RouteMode) -> Self {
        let config = tree.config();
        let label_size = viewport.to_screen_length(config.title_band * LABEL_SCALE);

        let nodes = tree
            .depth_first()
            .filter(|&id| tree.is_rendered(id))
            .filter_map(|id| {
                let rect = tree.rect(id)?;
                let radius = viewport.to_screen_length(tree.radius(id)?);
                let screen = viewport.to_screen_rect(rect);
                let hovered = tree.is_hovered(id);
                let baseline = Point::new(
                    rect.x0 + config.padding,
                    rect.y0 + (config.title_band + config.title_band * LABEL_SCALE) / 2.0,
                );
                Some(DrawNode {
                    id,
                    key: tree.key(id)?,
                    shape: screen.to_rounded_rect(radius),
                    label: tree.label(id)?.into(),
                    label_origin: viewport.to_screen(baseline),
                    label_size,
                    hovered,
                    handle: hovered.then(|| handle_arc(screen.x1, screen.y1, radius)),
                })
            })
            .collect();

        let edges = edges
            .routes(tree, mode)
            .map(|(edge, route)| DrawEdge {
                from: edge.from,
                to: edge.to,
                kind: edge.kind.clone(),
                points: route.points().iter().map(|&p| viewport.to_screen(p)).collect(),
            })
            .collect();

        Self {
            view_size: viewport.view_size(),
            nodes,
            edges,
        }
    }

    /// Issue the frame's drawing calls: background, nodes in order, then
    /// edges on top.
    pub fn paint(&self, surface: &mut impl Surface, theme: &Theme) {
        surface.fill_background(self.view_size, theme.background);
        for node in &self.nodes {
            let outline = if node.hovered {
                &theme.hovered_node
            } else {
                &theme.node
            };
            surface.stroke_rounded_rect(node.shape, outline);
            if !node.label.is_empty() {
                surface.text(node.label_origin, &node.label, node.label_size, theme.label);
            }
            if let Some(arc) = node.handle {
                surface.stroke_arc(arc, &theme.handle);
            }
        }
        for edge in &self.edges {
            surface.stroke_polyline(&edge.points, &theme.edge);
        }
    }

    /// The topmost drawn node with this key.
    pub fn node(&self, key: NodeKey) -> Option<&DrawNode> {
        self.nodes.iter().find(|n| n.key == key)
    }
}

/// Quarter arc of radius `radius / 2` around the handle anchor, sweeping
/// clockwise on screen from the right towards the bottom.
fn handle_arc(x1: f64, y1: f64, radius: f64) -> Arc {
    Arc::new(
        Point::new(x1 - radius, y1 - radius),
        Vec2::new(radius / 2.0, radius / 2.0),
        0.0,
        FRAC_PI_2,
        0.0,
    )
}
