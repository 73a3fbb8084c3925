//! Symbolic coordinate types.
//!
//! A [`Point`] in a shape table stays symbolic until draw time: each
//! component is either a plain number or a dimension formula resolved
//! against the current scope. Resolved points are `glam::DVec2`.

use std::borrow::Cow;

use glam::DVec2;

use crate::errors::Error;
use crate::eval::evaluate;
use crate::scope::Scope;

/// One coordinate component: a numeric literal used as-is, or a formula
/// resolved against the current scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    Num(f64),
    Expr(Cow<'static, str>),
}

impl Coord {
    pub const fn num(value: f64) -> Self {
        Coord::Num(value)
    }

    /// A formula component from a static table.
    pub const fn expr(formula: &'static str) -> Self {
        Coord::Expr(Cow::Borrowed(formula))
    }

    /// A formula component built at runtime.
    pub fn formula(formula: impl Into<String>) -> Self {
        Coord::Expr(Cow::Owned(formula.into()))
    }
}

impl From<f64> for Coord {
    fn from(value: f64) -> Self {
        Coord::Num(value)
    }
}

impl From<&'static str> for Coord {
    fn from(formula: &'static str) -> Self {
        Coord::expr(formula)
    }
}

/// A 2-D point whose components may stay symbolic until draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn new(x: impl Into<Coord>, y: impl Into<Coord>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    pub const fn num(x: f64, y: f64) -> Self {
        Point {
            x: Coord::num(x),
            y: Coord::num(y),
        }
    }

    pub const fn expr(x: &'static str, y: &'static str) -> Self {
        Point {
            x: Coord::expr(x),
            y: Coord::expr(y),
        }
    }

    /// Evaluate both components against `scope`.
    pub fn resolve(&self, scope: &Scope) -> Result<DVec2, Error> {
        Ok(DVec2::new(
            evaluate(&self.x, scope)?,
            evaluate(&self.y, scope)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_components_resolve_without_scope_vars() {
        let p = Point::num(3.0, -4.5);
        let v = p.resolve(&Scope::new()).unwrap();
        assert_eq!(v, DVec2::new(3.0, -4.5));
    }

    #[test]
    fn mixed_literal_and_formula() {
        let mut scope = Scope::new();
        scope.set("tab_width", 6.0);
        let p = Point::new(1.0, "tab_width / 2");
        let v = p.resolve(&scope).unwrap();
        assert_eq!(v, DVec2::new(1.0, 3.0));
    }
}
