// src/application/error_handling.rs
//
// Error envelope for commands
//
// ARCHITECTURE:
// - Maps internal errors to a stable {status, error: {code, kind, message}} shape
// - Caller mistakes (404, 422) carry their message through
// - Store and internal failures are logged and reported generically (500)

use std::fmt;

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard failure envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub kind: ErrorType,
    pub message: String,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input or unresolved reference (422)
    Validation,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn code(&self) -> u16 {
        match self {
            ErrorType::NotFound => 404,
            ErrorType::Validation => 422,
            ErrorType::Database | ErrorType::Internal => 500,
        }
    }
}

impl ErrorResponse {
    fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            status: "failure".to_string(),
            error: ErrorBody {
                code: kind.code(),
                kind,
                message: message.into(),
            },
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound { .. } => Self::new(ErrorType::NotFound, error.to_string()),

            AppError::Validation(domain_error) => {
                Self::new(ErrorType::Validation, domain_error.to_string())
            }

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self::new(ErrorType::Database, "Database operation failed")
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed")
            }

            other => {
                error!("Internal error: {}", other);
                Self::new(ErrorType::Internal, "Internal error")
            }
        }
    }

    pub fn not_found(resource: &str, id: i64) -> Self {
        Self::new(
            ErrorType::NotFound,
            format!("{} with id {} not found", resource, id),
        )
    }

    pub fn kind(&self) -> ErrorType {
        self.error.kind
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error.message, self.error.code)
    }
}

impl std::error::Error for ErrorResponse {}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use serde_json::json;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::movie_not_found(9));
        assert_eq!(error.kind(), ErrorType::NotFound);
        assert_eq!(error.error.code, 404);
        assert_eq!(error.error.message, "Movie with id 9 not found");
        assert_eq!(error, ErrorResponse::not_found("Movie", 9));
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Validation(
            DomainError::UnknownDirector(4),
        ));
        assert_eq!(error.error.code, 422);
        assert!(error.error.message.contains("Director 4"));
    }

    #[test]
    fn test_store_details_are_hidden() {
        let error = ErrorResponse::from_app_error(AppError::Pool(
            "timed out waiting for connection at /secret/path".to_string(),
        ));
        assert_eq!(error.kind(), ErrorType::Database);
        assert_eq!(error.error.code, 500);
        assert!(!error.error.message.contains("/secret/path"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::from_app_error(AppError::Validation(
            DomainError::ScoreOutOfRange(11),
        ));
        let value = serde_json::to_value(error).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "failure",
                "error": {
                    "code": 422,
                    "kind": "validation",
                    "message": "Score 11 is out of range, must be between 1 and 10"
                }
            })
        );
    }
}
