//! Composable coordinate transforms.
//!
//! Transforms are immutable once constructed. A rotation fixes its angle in
//! radians at construction and is never re-evaluated; a translation offset
//! may stay symbolic and is resolved against the scope active when the
//! transform is applied.

use glam::{DMat2, DVec2};

use crate::errors::Error;
use crate::scope::Scope;
use crate::types::Point;

#[derive(Debug, Clone)]
pub enum Transform {
    Translate(Point),
    Rotate(f64),
}

impl Transform {
    pub fn translate(offset: Point) -> Self {
        Transform::Translate(offset)
    }

    pub fn rotate(radians: f64) -> Self {
        Transform::Rotate(radians)
    }

    pub fn rotate_degrees(degrees: f64) -> Self {
        Transform::Rotate(degrees.to_radians())
    }

    fn apply(&self, point: DVec2, scope: &Scope) -> Result<DVec2, Error> {
        match self {
            Transform::Translate(offset) => Ok(point + offset.resolve(scope)?),
            Transform::Rotate(radians) => Ok(DMat2::from_angle(*radians) * point),
        }
    }
}

/// Ordered stack of transforms. Entries are pushed immediately before a
/// nested draw and popped immediately after it returns; correctness depends
/// on that push/pop discipline, enforced by
/// [`DrawContext`](crate::context::DrawContext)'s scoped helpers.
#[derive(Debug, Default)]
pub struct TransformStack {
    entries: Vec<Transform>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transform: Transform) {
        self.entries.push(transform);
    }

    pub fn pop(&mut self) -> Result<(), Error> {
        self.entries
            .pop()
            .map(|_| ())
            .ok_or(Error::StackUnderflow { stack: "transform" })
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Fold `point` through the stack outer-to-inner: the most recently
    /// pushed (innermost) transform applies first, the earliest-pushed
    /// applies last. A shape's local rotation therefore happens before the
    /// face's own placement.
    pub fn apply(&self, point: DVec2, scope: &Scope) -> Result<DVec2, Error> {
        let mut p = point;
        for transform in self.entries.iter().rev() {
            p = transform.apply(p, scope)?;
        }
        Ok(p)
    }
}
