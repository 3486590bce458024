use thiserror::Error;

use crate::errors::err::ErrorInfo;

pub type CalcResult<T> = Result<T, CalcError>;

/// Everything that can make a calculation request fail.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("{0}")]
    Malformed(#[from] ErrorInfo),

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },

    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),
}

impl CalcError {
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
