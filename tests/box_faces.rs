//! End-to-end assembly tests: four faces on a page, DXF output.

use std::collections::HashSet;

use glam::DVec2;
use manteau::{
    BoxConfig, BoxFactory, Canvas, DrawContext, DxfCanvas, FacePlan, LineStyle, Point,
    RecordingCanvas, Scope, Transform, draw_face,
};

const EPS: f64 = 1e-9;

fn base_scope() -> Scope {
    [
        ("face_width", 40.0),
        ("face_height", 40.0),
        ("tab_height", 2.0),
    ]
    .into_iter()
    .collect()
}

/// Four positive faces at the corners of a 50-unit grid: each contributes
/// one quad plus 4 edges x (2 corner shapes + 2 plain tabs).
#[test]
fn four_faces_at_page_offsets() {
    let mut ctx = DrawContext::new(base_scope());
    let mut canvas = RecordingCanvas::new();
    let plan = FacePlan::uniform(4, true);
    let style = LineStyle::default();

    let offsets = [(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)];
    for (dx, dy) in offsets {
        ctx.with_transform(Transform::translate(Point::num(dx, dy)), |ctx| {
            draw_face(ctx, &mut canvas, &plan, &style)
        })
        .unwrap();
    }

    // 16 tab shapes of 3 segments each, plus the quad, per face
    let per_face = 4 + 16 * 3;
    assert_eq!(canvas.lines.len(), 4 * per_face);

    let key = |p: DVec2| ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64);
    for face in canvas.lines.chunks(per_face) {
        let mut seen = HashSet::new();
        for (a, b) in face {
            assert!(
                seen.insert((key(*a), key(*b))),
                "duplicate segment within a face: {a:?} -> {b:?}"
            );
        }
    }

    // each face's quad is centered on its page offset
    for ((dx, dy), face) in offsets.iter().zip(canvas.lines.chunks(per_face)) {
        let (start, _) = face[0];
        assert!((start.x - (dx - 20.0)).abs() < EPS);
        assert!((start.y - (dy - 20.0)).abs() < EPS);
    }
}

#[test]
fn factory_dxf_has_all_entities() {
    let config = BoxConfig {
        face_width: 40.0,
        face_height: 40.0,
        tab_height: 2.0,
        strip_tab_count: 4,
        margin: 10.0,
    };
    let mut canvas = DxfCanvas::new();
    canvas.add_layer("LINES");
    BoxFactory::new(config).draw_faces(&mut canvas).unwrap();

    assert_eq!(canvas.line_count(), 2 * 52 + 2 * 40);
    let text = canvas.render();
    assert_eq!(text.matches("\nLINE\n").count(), canvas.line_count());
    assert!(text.starts_with("0\nSECTION\n"));
    assert!(text.ends_with("0\nEOF\n"));
}

#[test]
fn single_tab_box_renders() {
    // tab_count = 1: one full-width segment per edge, no corner divergence
    let mut ctx = DrawContext::new(base_scope());
    let mut canvas = RecordingCanvas::new();
    draw_face(
        &mut ctx,
        &mut canvas,
        &FacePlan::uniform(1, true),
        &LineStyle::default(),
    )
    .unwrap();
    assert_eq!(canvas.lines.len(), 4 + 4 * 3);
}
