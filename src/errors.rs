//! Error types with rich diagnostics using miette
//!
//! Formula errors carry the offending formula as source code so the label
//! points at the exact token.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Rule;

/// All failures of a generation run. Every variant is fatal: nothing is
/// persisted once one of these propagates.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("undefined variable: {name}")]
    #[diagnostic(code(manteau::eval::undefined_variable))]
    UndefinedVariable {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined in the current scope")]
        span: SourceSpan,
    },

    #[error("malformed expression: {message}")]
    #[diagnostic(code(manteau::eval::malformed_expression))]
    MalformedExpression {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse failed here")]
        span: SourceSpan,
    },

    #[error("division by zero")]
    #[diagnostic(code(manteau::eval::division_by_zero))]
    DivisionByZero {
        #[source_code]
        src: NamedSource<String>,
        #[label("divisor evaluates to zero")]
        span: SourceSpan,
    },

    #[error("{stack} stack popped below its base")]
    #[diagnostic(code(manteau::stack_underflow))]
    StackUnderflow { stack: &'static str },

    #[error("invalid tab count: {count}")]
    #[diagnostic(
        code(manteau::strip::invalid_tab_count),
        help("a tab strip needs at least one tab")
    )]
    InvalidTabCount { count: u32 },

    #[error("failed to write drawing")]
    #[diagnostic(code(manteau::canvas::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn undefined_variable(formula: &str, name: &str, span: pest::Span<'_>) -> Self {
        Error::UndefinedVariable {
            name: name.to_string(),
            src: NamedSource::new("<formula>", formula.to_string()),
            span: (span.start()..span.end()).into(),
        }
    }

    pub(crate) fn malformed_expression(formula: &str, err: &pest::error::Error<Rule>) -> Self {
        use pest::error::InputLocation;
        let (start, len) = match err.location {
            InputLocation::Pos(p) => (p.min(formula.len()), 0),
            InputLocation::Span((s, e)) => (s.min(formula.len()), e.saturating_sub(s)),
        };
        Error::MalformedExpression {
            message: err.variant.message().into_owned(),
            src: NamedSource::new("<formula>", formula.to_string()),
            span: (start, len).into(),
        }
    }

    pub(crate) fn division_by_zero(formula: &str, span: pest::Span<'_>) -> Self {
        Error::DivisionByZero {
            src: NamedSource::new("<formula>", formula.to_string()),
            span: (span.start()..span.end()).into(),
        }
    }
}
