//! Canvas capability and the DXF R12 implementation.
//!
//! The core only ever talks to the [`Canvas`] trait; persistence lives here.
//! The DXF writer emits a minimal R12 document (HEADER, TABLES, ENTITIES)
//! with LINE entities carrying layer and color group codes.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use glam::DVec2;

use crate::errors::Error;

/// Pen style for one emitted line: target layer and AutoCAD color index.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub layer: String,
    pub color: u8,
}

impl LineStyle {
    pub fn new(layer: impl Into<String>, color: u8) -> Self {
        LineStyle {
            layer: layer.into(),
            color,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::new("LINES", 7)
    }
}

/// Sink for finished line segments.
pub trait Canvas {
    fn add_layer(&mut self, name: &str);
    fn add_line(&mut self, p1: DVec2, p2: DVec2, style: &LineStyle);
    fn save(&mut self, path: &Path) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
struct DxfLine {
    start: DVec2,
    end: DVec2,
    layer: String,
    color: u8,
}

/// Accumulates line entities and writes a minimal DXF R12 document.
#[derive(Debug, Default)]
pub struct DxfCanvas {
    layers: Vec<String>,
    lines: Vec<DxfLine>,
}

impl DxfCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The full DXF document as text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_header(&self, out: &mut String) -> fmt::Result {
        group(out, 0, "SECTION")?;
        group(out, 2, "HEADER")?;
        group(out, 9, "$ACADVER")?;
        group(out, 1, "AC1009")?;
        group(out, 9, "$INSUNITS")?;
        group(out, 70, "4")?;
        group(out, 0, "ENDSEC")
    }

    fn write_tables(&self, out: &mut String) -> fmt::Result {
        group(out, 0, "SECTION")?;
        group(out, 2, "TABLES")?;

        group(out, 0, "TABLE")?;
        group(out, 2, "LTYPE")?;
        group(out, 70, "1")?;
        group(out, 0, "LTYPE")?;
        group(out, 2, "CONTINUOUS")?;
        group(out, 70, "0")?;
        group(out, 3, "Solid line")?;
        group(out, 72, "65")?;
        group(out, 73, "0")?;
        group(out, 40, "0.0")?;
        group(out, 0, "ENDTAB")?;

        group(out, 0, "TABLE")?;
        group(out, 2, "LAYER")?;
        writeln!(out, "70\n{}", self.layers.len())?;
        for layer in &self.layers {
            group(out, 0, "LAYER")?;
            group(out, 2, layer)?;
            group(out, 70, "0")?;
            group(out, 62, "7")?;
            group(out, 6, "CONTINUOUS")?;
        }
        group(out, 0, "ENDTAB")?;

        group(out, 0, "ENDSEC")
    }

    fn write_entities(&self, out: &mut String) -> fmt::Result {
        group(out, 0, "SECTION")?;
        group(out, 2, "ENTITIES")?;
        for line in &self.lines {
            group(out, 0, "LINE")?;
            group(out, 8, &line.layer)?;
            writeln!(out, "62\n{}", line.color)?;
            writeln!(out, "10\n{:.6}", line.start.x)?;
            writeln!(out, "20\n{:.6}", line.start.y)?;
            writeln!(out, "11\n{:.6}", line.end.x)?;
            writeln!(out, "21\n{:.6}", line.end.y)?;
        }
        group(out, 0, "ENDSEC")
    }
}

fn group(out: &mut String, code: u16, value: &str) -> fmt::Result {
    writeln!(out, "{code}\n{value}")
}

impl fmt::Display for DxfCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_header(&mut out)?;
        self.write_tables(&mut out)?;
        self.write_entities(&mut out)?;
        group(&mut out, 0, "EOF")?;
        f.write_str(&out)
    }
}

impl Canvas for DxfCanvas {
    fn add_layer(&mut self, name: &str) {
        if !self.layers.iter().any(|l| l == name) {
            self.layers.push(name.to_string());
        }
    }

    fn add_line(&mut self, p1: DVec2, p2: DVec2, style: &LineStyle) {
        self.lines.push(DxfLine {
            start: p1,
            end: p2,
            layer: style.layer.clone(),
            color: style.color,
        });
    }

    fn save(&mut self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// In-memory canvas that records emitted lines for inspection.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub layers: Vec<String>,
    pub lines: Vec<(DVec2, DVec2)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn add_layer(&mut self, name: &str) {
        self.layers.push(name.to_string());
    }

    fn add_line(&mut self, p1: DVec2, p2: DVec2, _style: &LineStyle) {
        self.lines.push((p1, p2));
    }

    fn save(&mut self, _path: &Path) -> Result<(), Error> {
        Ok(())
    }
}
