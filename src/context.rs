//! Drawing context: the scope and transform stacks threaded through a pass.
//!
//! Both stacks are call-stack-scoped. The `with_*` helpers are the only way
//! drawing code pushes onto them: they pop on every exit path, so a failure
//! mid-draw cannot leave either stack unbalanced.

use glam::DVec2;

use crate::errors::Error;
use crate::scope::{Scope, ScopeStack};
use crate::transform::{Transform, TransformStack};
use crate::types::Point;

pub struct DrawContext {
    pub scopes: ScopeStack,
    pub transforms: TransformStack,
}

impl DrawContext {
    /// A fresh context over the given base scope (the flat configuration
    /// mapping) and an empty transform stack.
    pub fn new(base: Scope) -> Self {
        DrawContext {
            scopes: ScopeStack::new(base),
            transforms: TransformStack::new(),
        }
    }

    /// Evaluate a symbolic point against the current scope top, then fold it
    /// through the transform stack.
    pub fn resolve(&self, point: &Point) -> Result<DVec2, Error> {
        let local = point.resolve(self.scopes.top())?;
        self.transforms.apply(local, self.scopes.top())
    }

    /// Run `f` with `overrides` layered on a fresh scope frame. The frame is
    /// popped before returning, whether `f` succeeded or not.
    pub fn with_scope<T>(
        &mut self,
        overrides: &[(&str, f64)],
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.scopes.push(overrides);
        let result = f(self);
        self.scopes.pop()?;
        result
    }

    /// Run `f` with `transform` pushed. The entry is popped before
    /// returning, whether `f` succeeded or not.
    pub fn with_transform<T>(
        &mut self,
        transform: Transform,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.transforms.push(transform);
        let result = f(self);
        self.transforms.pop()?;
        result
    }
}
