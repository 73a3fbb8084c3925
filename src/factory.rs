//! Box factory: composes faces at page offsets and persists the drawing.
//!
//! Thin orchestration over the core engine. Faces sit on a 2x2 page grid in
//! checkerboard polarity, so every pair of neighboring faces has
//! complementary joints on its facing edges.

use std::path::Path;

use crate::canvas::{Canvas, LineStyle};
use crate::context::DrawContext;
use crate::errors::Error;
use crate::face::{FacePlan, draw_face};
use crate::log::debug;
use crate::scope::Scope;
use crate::transform::Transform;
use crate::types::Point;

/// Input dimensions for a box, in drawing units.
#[derive(Debug, Clone, Copy)]
pub struct BoxConfig {
    pub face_width: f64,
    pub face_height: f64,
    /// How far each tab protrudes past the face outline.
    pub tab_height: f64,
    /// Tabs per edge on a positive-polarity strip.
    pub strip_tab_count: u32,
    /// Gap between neighboring faces on the page.
    pub margin: f64,
}

impl BoxConfig {
    /// The flat parameter mapping handed to the engine as the base scope.
    pub fn base_scope(&self) -> Scope {
        [
            ("face_width", self.face_width),
            ("face_height", self.face_height),
            ("tab_height", self.tab_height),
        ]
        .into_iter()
        .collect()
    }
}

pub struct BoxFactory {
    config: BoxConfig,
    style: LineStyle,
}

impl BoxFactory {
    pub fn new(config: BoxConfig) -> Self {
        BoxFactory {
            config,
            style: LineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Draw four interlocking faces on a 2x2 page grid.
    pub fn draw_faces(&self, canvas: &mut dyn Canvas) -> Result<(), Error> {
        let mut ctx = DrawContext::new(self.config.base_scope());
        let pitch_x = self.config.face_width + self.config.margin;
        let pitch_y = self.config.face_height + self.config.margin;
        let plan = FacePlan::uniform(self.config.strip_tab_count, true);

        for (col, row) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let face_plan = if (col + row) % 2 == 0 {
                plan
            } else {
                plan.complement()
            };
            let offset = Point::num(f64::from(col) * pitch_x, f64::from(row) * pitch_y);
            debug!(col, row, "placing face");
            ctx.with_transform(Transform::translate(offset), |ctx| {
                draw_face(ctx, canvas, &face_plan, &self.style)
            })?;
        }
        Ok(())
    }

    /// Draw the faces and persist the finished drawing.
    ///
    /// Nothing is written if any draw step fails.
    pub fn generate(&self, canvas: &mut dyn Canvas, path: &Path) -> Result<(), Error> {
        canvas.add_layer(&self.style.layer);
        self.draw_faces(canvas)?;
        canvas.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    fn config() -> BoxConfig {
        BoxConfig {
            face_width: 40.0,
            face_height: 40.0,
            tab_height: 2.0,
            strip_tab_count: 4,
            margin: 10.0,
        }
    }

    #[test]
    fn four_faces_in_checkerboard_polarity() {
        let mut canvas = RecordingCanvas::new();
        BoxFactory::new(config()).draw_faces(&mut canvas).unwrap();
        // two positive faces (52 lines each) + two complements (40 each)
        assert_eq!(canvas.lines.len(), 2 * 52 + 2 * 40);
    }

    #[test]
    fn faces_do_not_overlap_on_the_page() {
        let cfg = config();
        let mut canvas = RecordingCanvas::new();
        BoxFactory::new(cfg).draw_faces(&mut canvas).unwrap();
        // face extent is face_width + 2 * tab_height < pitch
        let reach = cfg.face_width / 2.0 + cfg.tab_height;
        let pitch = cfg.face_width + cfg.margin;
        assert!(2.0 * reach < pitch);
        for (a, b) in &canvas.lines {
            for p in [a, b] {
                assert!(p.x >= -reach - 1e-9 && p.x <= pitch + reach + 1e-9);
                assert!(p.y >= -reach - 1e-9 && p.y <= pitch + reach + 1e-9);
            }
        }
    }

    #[test]
    fn generate_adds_the_layer_before_drawing() {
        let mut canvas = RecordingCanvas::new();
        BoxFactory::new(config())
            .generate(&mut canvas, Path::new("/dev/null"))
            .unwrap();
        assert_eq!(canvas.layers, vec!["LINES".to_string()]);
        assert!(!canvas.lines.is_empty());
    }
}
