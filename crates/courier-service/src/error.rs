use thiserror::Error;

use courier_core::contact::{ContactId, ValidationError};
use courier_core::error::CoreError;
use courier_db::error::DbError;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Invalid contact id: {0}")]
    InvalidIdentifier(String),

    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error(transparent)]
    DatabaseError(DbError),

    #[error(transparent)]
    CoreError(CoreError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(id) => Self::NotFound(id),
            other => Self::DatabaseError(other),
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(validation) => Self::ValidationError(validation),
            CoreError::InvalidIdentifier(raw) => Self::InvalidIdentifier(raw),
            other => Self::CoreError(other),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
