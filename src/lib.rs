//! manteau generates 2-D vector line geometry for boxes whose edges are cut
//! with interlocking finger joints, ready for a CNC or laser cutter.
//!
//! The engine is parametric: shape definitions are static tables of line
//! segments whose endpoints are dimension formulas (`"tab_width - tab_height"`)
//! resolved against a stack of named-variable scopes, and every point passes
//! through a stack of composable translate/rotate transforms before it is
//! emitted to a [`Canvas`].
//!
//! ```no_run
//! use manteau::{BoxConfig, generate_box};
//!
//! let config = BoxConfig {
//!     face_width: 40.0,
//!     face_height: 40.0,
//!     tab_height: 2.0,
//!     strip_tab_count: 4,
//!     margin: 10.0,
//! };
//! generate_box(&config, "box.dxf")?;
//! # Ok::<(), manteau::Error>(())
//! ```

use std::path::Path;

use pest_derive::Parser;

pub mod canvas;
pub mod context;
pub mod errors;
pub mod eval;
pub mod face;
pub mod factory;
pub mod log;
pub mod scope;
pub mod shapes;
pub mod strip;
pub mod transform;
pub mod types;

/// Pest parser for dimension formulas (see `src/expr.pest`).
#[derive(Parser)]
#[grammar = "expr.pest"]
pub struct FormulaParser;

pub use canvas::{Canvas, DxfCanvas, LineStyle, RecordingCanvas};
pub use context::DrawContext;
pub use errors::Error;
pub use face::{FacePlan, draw_face};
pub use factory::{BoxConfig, BoxFactory};
pub use scope::{Scope, ScopeStack};
pub use shapes::{Op, Profile, Segment};
pub use strip::{StripSpec, draw_strip};
pub use transform::{Transform, TransformStack};
pub use types::{Coord, Point};

/// Generate the full cut drawing for a box and save it as DXF.
///
/// Convenience wrapper over [`BoxFactory`] with a fresh [`DxfCanvas`].
pub fn generate_box(config: &BoxConfig, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut canvas = DxfCanvas::new();
    BoxFactory::new(*config).generate(&mut canvas, path.as_ref())
}
