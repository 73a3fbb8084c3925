//! Shape definitions and line emission.
//!
//! Each shape is a static table of (opcode, endpoint-pair) entries in its
//! own local frame, parameterized over scope variables. The variant set is
//! closed; dispatch from opcode to canvas method is an explicit match.

use crate::canvas::{Canvas, LineStyle};
use crate::context::DrawContext;
use crate::errors::Error;
use crate::types::Point;

/// Line-emission opcode. Arcs or circles would extend this set; the engine
/// only emits straight segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Line,
}

/// One table entry: an opcode and its endpoints in the shape's local frame.
#[derive(Debug)]
pub struct Segment {
    pub op: Op,
    pub a: Point,
    pub b: Point,
}

const fn seg(ax: &'static str, ay: &'static str, bx: &'static str, by: &'static str) -> Segment {
    Segment {
        op: Op::Line,
        a: Point::expr(ax, ay),
        b: Point::expr(bx, by),
    }
}

/// Three-sided rectangular protrusion, open along the edge axis.
static TAB: [Segment; 3] = [
    seg("0", "0", "0", "tab_height"),
    seg("0", "tab_height", "tab_width", "tab_height"),
    seg("tab_width", "tab_height", "tab_width", "0"),
];

/// `Tab` with its leading side pulled in by one `tab_height`, so the joint
/// of the perpendicular edge sharing that corner keeps its clearance.
static LEFT_CORNER: [Segment; 3] = [
    seg("tab_height", "0", "tab_height", "tab_height"),
    seg("tab_height", "tab_height", "tab_width", "tab_height"),
    seg("tab_width", "tab_height", "tab_width", "0"),
];

/// Mirror of `LeftCorner`: the trailing side is pulled in instead.
static RIGHT_CORNER: [Segment; 3] = [
    seg("0", "0", "0", "tab_height"),
    seg("0", "tab_height", "tab_width - tab_height", "tab_height"),
    seg(
        "tab_width - tab_height",
        "tab_height",
        "tab_width - tab_height",
        "0",
    ),
];

/// Closed four-sided face outline, centered on the face origin.
static QUAD: [Segment; 4] = [
    seg(
        "-face_width / 2",
        "-face_height / 2",
        "face_width / 2",
        "-face_height / 2",
    ),
    seg(
        "face_width / 2",
        "-face_height / 2",
        "face_width / 2",
        "face_height / 2",
    ),
    seg(
        "face_width / 2",
        "face_height / 2",
        "-face_width / 2",
        "face_height / 2",
    ),
    seg(
        "-face_width / 2",
        "face_height / 2",
        "-face_width / 2",
        "-face_height / 2",
    ),
];

/// The closed set of drawable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Tab,
    LeftCorner,
    RightCorner,
    Quad,
}

impl Profile {
    /// The shape's segment table.
    pub fn segments(self) -> &'static [Segment] {
        match self {
            Profile::Tab => &TAB,
            Profile::LeftCorner => &LEFT_CORNER,
            Profile::RightCorner => &RIGHT_CORNER,
            Profile::Quad => &QUAD,
        }
    }

    /// Evaluate every table entry through the transform stack and emit the
    /// resulting primitives to the canvas.
    pub fn draw(
        self,
        ctx: &mut DrawContext,
        canvas: &mut dyn Canvas,
        style: &LineStyle,
    ) -> Result<(), Error> {
        for segment in self.segments() {
            let a = ctx.resolve(&segment.a)?;
            let b = ctx.resolve(&segment.b)?;
            match segment.op {
                Op::Line => canvas.add_line(a, b, style),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::scope::Scope;
    use glam::DVec2;

    fn ctx() -> DrawContext {
        let base: Scope = [
            ("face_width", 40.0),
            ("face_height", 30.0),
            ("tab_width", 6.0),
            ("tab_height", 2.0),
        ]
        .into_iter()
        .collect();
        DrawContext::new(base)
    }

    #[test]
    fn tab_is_open_along_the_edge_axis() {
        let mut canvas = RecordingCanvas::new();
        Profile::Tab
            .draw(&mut ctx(), &mut canvas, &LineStyle::default())
            .unwrap();
        assert_eq!(canvas.lines.len(), 3);
        assert_eq!(canvas.lines[0].0, DVec2::new(0.0, 0.0));
        assert_eq!(canvas.lines[1].1, DVec2::new(6.0, 2.0));
        assert_eq!(canvas.lines[2].1, DVec2::new(6.0, 0.0));
    }

    #[test]
    fn corner_variants_are_shortened_by_one_tab_height() {
        let mut left = RecordingCanvas::new();
        Profile::LeftCorner
            .draw(&mut ctx(), &mut left, &LineStyle::default())
            .unwrap();
        assert_eq!(left.lines[0].0, DVec2::new(2.0, 0.0));

        let mut right = RecordingCanvas::new();
        Profile::RightCorner
            .draw(&mut ctx(), &mut right, &LineStyle::default())
            .unwrap();
        assert_eq!(right.lines[2].1, DVec2::new(4.0, 0.0));
    }

    #[test]
    fn quad_is_closed_and_centered() {
        let mut canvas = RecordingCanvas::new();
        Profile::Quad
            .draw(&mut ctx(), &mut canvas, &LineStyle::default())
            .unwrap();
        assert_eq!(canvas.lines.len(), 4);
        // each segment starts where the previous one ended
        for pair in canvas.lines.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(canvas.lines[3].1, canvas.lines[0].0);
        assert_eq!(canvas.lines[0].0, DVec2::new(-20.0, -15.0));
    }

    #[test]
    fn missing_parameter_aborts_the_draw() {
        let mut canvas = RecordingCanvas::new();
        let mut ctx = DrawContext::new(Scope::new());
        let err = Profile::Tab
            .draw(&mut ctx, &mut canvas, &LineStyle::default())
            .unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { .. }));
    }
}
