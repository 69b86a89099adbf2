use thiserror::Error;

use crate::contact::validation::ValidationError;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid contact id: {0}")]
    InvalidIdentifier(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
