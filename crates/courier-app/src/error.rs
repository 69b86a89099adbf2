use salvo::Response;
use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use courier_core::error::CoreError;
use courier_db::error::DbError;
use courier_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

const fn db_status(err: &DbError) -> StatusCode {
    match err {
        DbError::NotFound(_) => StatusCode::NOT_FOUND,
        other if other.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

const fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Validation(_) | CoreError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        CoreError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl AppError {
    /// ## Summary
    /// Maps every error variant to the HTTP status returned to the client.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::ServiceError(
                ServiceError::ValidationError(_) | ServiceError::InvalidIdentifier(_),
            ) => StatusCode::BAD_REQUEST,
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::DatabaseError(db)) => db_status(db),
            Self::ServiceError(ServiceError::CoreError(core)) | Self::CoreError(core) => {
                core_status(core)
            }
        }
    }

    /// Offending field for validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::ServiceError(ServiceError::ValidationError(v))
            | Self::CoreError(CoreError::Validation(v)) => Some(v.field),
            _ => None,
        }
    }

    /// Client-facing message. Server-side failures are not described in
    /// detail; the full error is logged instead.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self.status_code() {
            StatusCode::SERVICE_UNAVAILABLE => "Database unavailable".to_string(),
            status if status.is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// ## Summary
    /// Writes the status code and JSON error body to `res`.
    pub fn render(&self, res: &mut Response) {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self, status = %status, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.client_message(),
            field: self.field(),
        }));
    }
}
