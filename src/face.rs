//! Box-face assembly: quad outline plus four edge tab strips.
//!
//! Each edge gets a fresh translate-to-midpoint + rotate transform pair and
//! a fresh scope frame, built and torn down before the next edge is drawn.

use crate::canvas::{Canvas, LineStyle};
use crate::context::DrawContext;
use crate::errors::Error;
use crate::eval::evaluate_formula;
use crate::log::debug;
use crate::shapes::Profile;
use crate::strip::{StripSpec, draw_strip};
use crate::transform::Transform;
use crate::types::Point;

/// Joint layout for one face: the four edges in draw order
/// bottom, left, top, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePlan {
    pub edges: [StripSpec; 4],
}

impl FacePlan {
    /// The same tab count and polarity on every edge.
    pub fn uniform(tab_count: u32, start_positive: bool) -> Self {
        FacePlan {
            edges: [StripSpec::new(tab_count, start_positive); 4],
        }
    }

    /// Every edge's polarity inverted, as for a mating face.
    pub fn complement(self) -> Self {
        FacePlan {
            edges: self.edges.map(StripSpec::complement),
        }
    }
}

/// Midpoint, orientation, and length variable for each edge, in draw order.
const EDGES: [(&str, &str, f64, &str); 4] = [
    ("0", "-face_height / 2", 0.0, "face_width"),
    ("-face_width / 2", "0", 90.0, "face_height"),
    ("0", "face_height / 2", 180.0, "face_width"),
    ("face_width / 2", "0", 270.0, "face_height"),
];

/// Draw one face: the quad outline, then the four edge strips.
///
/// Expects `face_width`, `face_height`, and `tab_height` in the current
/// scope. Each edge pushes its own transform pair and scope frame and pops
/// them before the next edge, so no edge's placement can leak into
/// another's.
pub fn draw_face(
    ctx: &mut DrawContext,
    canvas: &mut dyn Canvas,
    plan: &FacePlan,
    style: &LineStyle,
) -> Result<(), Error> {
    Profile::Quad.draw(ctx, canvas, style)?;

    for (spec, (mid_x, mid_y, orientation, length_var)) in plan.edges.iter().zip(EDGES) {
        let length = evaluate_formula(length_var, ctx.scopes.top())?;
        debug!(orientation, length, "edge strip");
        ctx.with_transform(Transform::translate(Point::expr(mid_x, mid_y)), |ctx| {
            ctx.with_transform(Transform::rotate_degrees(orientation), |ctx| {
                ctx.with_scope(&[("edge_length", length)], |ctx| {
                    draw_strip(ctx, canvas, *spec, style)
                })
            })
        })?;
    }
    Ok(())
}
