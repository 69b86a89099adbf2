use thiserror::Error;

use courier_core::contact::ContactId;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Contact not found: {0}")]
    NotFound(ContactId),
}

impl DbError {
    /// ## Summary
    /// Returns `true` when the store itself could not be reached.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::PoolError(_) | Self::MigrationError(_))
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;
