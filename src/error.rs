use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Business-rule and persistence failures surfaced by the lifecycle managers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or empty required field.
    #[error("{0}")]
    Validation(String),

    /// Email failed the syntax check.
    #[error("Invalid email format")]
    InvalidFormat,

    /// Uniqueness violation on employee_id, email, or (employee_id, date).
    #[error("{0}")]
    DuplicateKey(String),

    /// Lookup by id or natural key missed.
    #[error("{0}")]
    NotFound(String),

    /// Persistence-layer failure.
    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ServiceError {
    /// Folds a unique-index violation from the store into the same
    /// duplicate-key error the preceding existence check would have produced.
    pub fn duplicate_on_unique(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::DuplicateKey(message.to_string())
            }
            _ => Self::Store(err),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidFormat | Self::DuplicateKey(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(err) => match err {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Store(err) => {
                error!(error = %err, "Store operation failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_map_to_client_codes() {
        assert_eq!(
            ServiceError::Validation("Full name is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServiceError::InvalidFormat.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::DuplicateKey("Email already exists".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound("Employee not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn pool_exhaustion_maps_to_service_unavailable() {
        assert_eq!(
            ServiceError::Store(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::Store(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
