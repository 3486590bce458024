use thiserror::Error;

use crate::source_pos::{Span, Spanned};

pub type SpannedErr = Spanned<Error>;
pub type ConvertResult<T> = Result<T, ErrorInfo>;

/// A malformed expression, located in the source it was read from.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error} at {}..{}", .span.start, .span.end)]
pub struct ErrorInfo {
    pub error: Error,
    pub span: Span,
}

impl ErrorInfo {
    pub fn new(error: Error, span: Span) -> Self {
        Self { error, span }
    }
}

impl From<SpannedErr> for ErrorInfo {
    fn from(Spanned { elem, span }: SpannedErr) -> Self {
        Self::new(elem, span)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(char),
    #[error("mismatched parentheses: unmatched '{0}'")]
    UnmatchedParenthesis(char),
    #[error("operator '{0}' is missing an operand")]
    TrailingOperator(&'static str),
    #[error("missing operator next to '{0}'")]
    MissingOperator(String),
    #[error("empty parentheses")]
    EmptyParentheses,
}
