//! Tab-strip layout: subdivides an edge into alternating finger joints.
//!
//! An edge of length `L` is split into `2 * tab_count - 1` segments of equal
//! width; every other segment carries a tab. The polarity flag selects
//! whether the run starts on a protruding or a recessed segment, which is
//! how facing edges of mating faces interlock.

use crate::canvas::{Canvas, LineStyle};
use crate::context::DrawContext;
use crate::errors::Error;
use crate::eval::evaluate_formula;
use crate::log::debug;
use crate::shapes::Profile;
use crate::transform::Transform;
use crate::types::Point;

/// Joint layout for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSpec {
    /// Number of protruding tabs when `start_positive` is true.
    pub tab_count: u32,
    /// Whether the first segment protrudes (true) or recesses (false).
    pub start_positive: bool,
}

impl StripSpec {
    pub fn new(tab_count: u32, start_positive: bool) -> Self {
        StripSpec {
            tab_count,
            start_positive,
        }
    }

    /// The same strip with inverted polarity, as cut into the mating face.
    pub fn complement(self) -> Self {
        StripSpec {
            start_positive: !self.start_positive,
            ..self
        }
    }
}

/// Draw one edge's tab strip, centered on the current origin and running
/// along the local x axis.
///
/// Expects `edge_length` and `tab_height` in the current scope. Publishes
/// `tab_width` (segment width) and `step` (placement index) for the shape
/// tables. The first and last placed segments use the corner variants so
/// adjoining edges' joints never overlap at a shared corner; a one-segment
/// strip keeps the plain full-width tab.
pub fn draw_strip(
    ctx: &mut DrawContext,
    canvas: &mut dyn Canvas,
    spec: StripSpec,
    style: &LineStyle,
) -> Result<(), Error> {
    if spec.tab_count < 1 {
        return Err(Error::InvalidTabCount {
            count: spec.tab_count,
        });
    }

    let length = evaluate_formula("edge_length", ctx.scopes.top())?;
    let total_segments = 2 * spec.tab_count - 1;
    let width = length / f64::from(total_segments);
    debug!(total_segments, width, "strip layout");

    let first = if spec.start_positive { 0 } else { 1 };
    let last = (first..total_segments).step_by(2).last();

    for step in (first..total_segments).step_by(2) {
        let profile = if total_segments == 1 {
            Profile::Tab
        } else if step == first {
            Profile::LeftCorner
        } else if Some(step) == last {
            Profile::RightCorner
        } else {
            Profile::Tab
        };

        ctx.with_scope(
            &[("tab_width", width), ("step", f64::from(step))],
            |ctx| {
                ctx.with_transform(
                    Transform::translate(Point::expr("step * tab_width - edge_length / 2", "0")),
                    |ctx| profile.draw(ctx, canvas, style),
                )
            },
        )?;
    }
    Ok(())
}
