// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session, printed instead of drawn.
//!
//! This example shows how to:
//! - load a diagram from a flat node list with containment relations,
//! - feed pointer, wheel and clock input to a `Session`,
//! - paint frames through a `Surface` that logs its calls.
//!
//! Run:
//! - `cargo run -p canopy_demos --example session_basics`

use canopy_editor::{Session, SessionConfig, SessionEvent, StrokeStyle, Surface, Theme};
use canopy_event_state::interaction::PointerButton;
use canopy_route::RouteMode;
use canopy_tree::{EdgeDesc, FlatDiagram, FlatNode, NodeKey};
use kurbo::{Arc, Point, RoundedRect, Size};
use peniko::Color;

/// Prints one line per drawing call.
struct LogSurface;

impl Surface for LogSurface {
    fn fill_background(&mut self, size: Size, _color: Color) {
        println!("  background {}x{}", size.width, size.height);
    }

    fn stroke_rounded_rect(&mut self, shape: RoundedRect, style: &StrokeStyle) {
        let r = shape.rect();
        println!(
            "  box ({:.0}, {:.0})-({:.0}, {:.0}) width {}",
            r.x0, r.y0, r.x1, r.y1, style.stroke.width
        );
    }

    fn stroke_arc(&mut self, arc: Arc, _style: &StrokeStyle) {
        println!("  handle at ({:.0}, {:.0})", arc.center.x, arc.center.y);
    }

    fn text(&mut self, origin: Point, text: &str, size: f64, _color: Color) {
        println!("  label {text:?} at ({:.0}, {:.0}) size {size:.0}", origin.x, origin.y);
    }

    fn stroke_polyline(&mut self, points: &[Point], _style: &StrokeStyle) {
        let path: Vec<String> = points
            .iter()
            .map(|p| format!("({:.0}, {:.0})", p.x, p.y))
            .collect();
        println!("  edge {}", path.join(" -> "));
    }
}

fn frame(title: &str, session: &Session, theme: &Theme) {
    println!("{title}:");
    session.draw_list().paint(&mut LogSurface, theme);
}

fn report(events: &[SessionEvent]) {
    for event in events {
        println!("event: {event:?}");
    }
}

fn main() {
    // Two services, each with two handlers, as a graph export would list them.
    let node = |key: u64, name: &str, x: f64, y: f64| FlatNode::new(NodeKey(key), name, (x, y));
    let flat = FlatDiagram {
        nodes: vec![
            node(1, "orders", 100.0, 100.0).with_size(200.0, 150.0),
            node(11, "create", 120.0, 120.0).with_size(60.0, 40.0),
            node(12, "cancel", 200.0, 150.0).with_size(60.0, 40.0),
            node(2, "billing", 400.0, 300.0).with_size(200.0, 150.0),
            node(21, "charge", 420.0, 320.0).with_size(60.0, 40.0),
            node(22, "refund", 500.0, 350.0).with_size(60.0, 40.0),
        ],
        contains: vec![
            (NodeKey(1), NodeKey(11)),
            (NodeKey(1), NodeKey(12)),
            (NodeKey(2), NodeKey(21)),
            (NodeKey(2), NodeKey(22)),
        ],
        edges: vec![
            EdgeDesc::new(NodeKey(11), NodeKey(21), "CALLS"),
            EdgeDesc::new(NodeKey(12), NodeKey(22), "CALLS"),
        ],
    };

    let config = SessionConfig::default().with_route_mode(RouteMode::Orthogonal);
    let mut session = match Session::from_flat(flat, config, Size::new(800.0, 600.0)) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot load diagram: {err}");
            return;
        }
    };
    let theme = Theme::default();
    frame("initial", &session, &theme);

    // Hover the "create" handler, then drag it right.
    let _ = session.pointer_move(Point::new(150.0, 140.0));
    frame("hovering create", &session, &theme);
    let _ = session.pointer_down(Point::new(150.0, 140.0), PointerButton::Primary, 0);
    let _ = session.pointer_move(Point::new(170.0, 145.0));
    let _ = session.pointer_up(Point::new(170.0, 145.0), 40);

    // Double-click "orders" to collapse it; edges now start at the service.
    let on_orders = Point::new(280.0, 230.0);
    for t in [1000, 1100] {
        let _ = session.pointer_down(on_orders, PointerButton::Primary, t);
        let response = session.pointer_up(on_orders, t + 10);
        report(&response.events);
    }
    frame("orders collapsed", &session, &theme);

    // A lone click is only reported once the double-click delay runs out.
    let on_billing = Point::new(580.0, 310.0);
    let _ = session.pointer_down(on_billing, PointerButton::Primary, 2000);
    let _ = session.pointer_up(on_billing, 2010);
    if let Some(deadline) = session.click_deadline() {
        report(&session.tick(deadline).events);
    }

    // Zoom in around the viewport centre.
    let _ = session.wheel(Point::new(400.0, 300.0), -250.0);
    println!(
        "zoomed: scale {:.2}, offset ({:.1}, {:.1})",
        session.viewport().scale(),
        session.viewport().offset().x,
        session.viewport().offset().y
    );
    frame("zoomed", &session, &theme);
}
