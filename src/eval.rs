//! Closed evaluation of dimension formulas.
//!
//! The only names visible to a formula are the variables of the scope it is
//! handed: no ambient globals, no host state. Parsing goes through the pest
//! grammar in `expr.pest`; precedence is encoded in the grammar rules
//! (expr > term > factor > primary).

use pest::Parser;
use pest::iterators::Pair;

use crate::errors::Error;
use crate::scope::Scope;
use crate::types::Coord;
use crate::{FormulaParser, Rule};

/// Resolve one coordinate component. Numeric literals pass through
/// unchanged; formulas are parsed and evaluated against `scope`.
pub fn evaluate(coord: &Coord, scope: &Scope) -> Result<f64, Error> {
    match coord {
        Coord::Num(n) => Ok(*n),
        Coord::Expr(formula) => evaluate_formula(formula, scope),
    }
}

/// Parse and evaluate a formula string against `scope`.
pub fn evaluate_formula(formula: &str, scope: &Scope) -> Result<f64, Error> {
    let mut pairs = FormulaParser::parse(Rule::formula, formula)
        .map_err(|e| Error::malformed_expression(formula, &e))?;
    // formula = SOI ~ expr ~ EOI, so the first inner pair is the expr
    let root = pairs.next().unwrap();
    let expr = root.into_inner().next().unwrap();
    eval_expr(expr, formula, scope)
}

fn eval_expr(pair: Pair<'_, Rule>, formula: &str, scope: &Scope) -> Result<f64, Error> {
    let mut inner = pair.into_inner();
    let mut value = eval_term(inner.next().unwrap(), formula, scope)?;
    while let Some(op) = inner.next() {
        let rhs = eval_term(inner.next().unwrap(), formula, scope)?;
        match op.as_str() {
            "+" => value += rhs,
            _ => value -= rhs,
        }
    }
    Ok(value)
}

fn eval_term(pair: Pair<'_, Rule>, formula: &str, scope: &Scope) -> Result<f64, Error> {
    let mut inner = pair.into_inner();
    let mut value = eval_factor(inner.next().unwrap(), formula, scope)?;
    while let Some(op) = inner.next() {
        let rhs_pair = inner.next().unwrap();
        let rhs_span = rhs_pair.as_span();
        let rhs = eval_factor(rhs_pair, formula, scope)?;
        match op.as_str() {
            "*" => value *= rhs,
            _ => {
                if rhs == 0.0 {
                    return Err(Error::division_by_zero(formula, rhs_span));
                }
                value /= rhs;
            }
        }
    }
    Ok(value)
}

fn eval_factor(pair: Pair<'_, Rule>, formula: &str, scope: &Scope) -> Result<f64, Error> {
    let mut inner = pair.into_inner();
    let first = inner.next().unwrap();
    match first.as_rule() {
        Rule::neg_op => Ok(-eval_primary(inner.next().unwrap(), formula, scope)?),
        _ => eval_primary(first, formula, scope),
    }
}

fn eval_primary(pair: Pair<'_, Rule>, formula: &str, scope: &Scope) -> Result<f64, Error> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::number => Ok(inner.as_str().parse().unwrap()),
        Rule::ident => {
            let name = inner.as_str();
            scope
                .get(name)
                .ok_or_else(|| Error::undefined_variable(formula, name, inner.as_span()))
        }
        _ => eval_expr(inner, formula, scope),
    }
}
