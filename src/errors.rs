use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Insufficient question pool: {available} available, {requested} requested")]
    InsufficientPool { available: usize, requested: usize },

    #[error("Already submitted: {0}")]
    AlreadySubmitted(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Access expired: {0}")]
    AccessExpired(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::InsufficientPool { .. } => "INSUFFICIENT_POOL",
            AppError::AlreadySubmitted(_) => "ALREADY_SUBMITTED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AccessExpired(_) => "ACCESS_EXPIRED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::InsufficientPool { .. } => StatusCode::BAD_REQUEST,
            AppError::AlreadySubmitted(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AccessExpired(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            kind: self.error_code(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AlreadySubmitted("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::InsufficientPool {
                available: 10,
                requested: 20
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AccessExpired("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("exam session".into());
        assert_eq!(err.to_string(), "Not found: exam session");
    }

    #[test]
    fn test_insufficient_pool_message_carries_both_counts() {
        let err = AppError::InsufficientPool {
            available: 12,
            requested: 25,
        };
        let message = err.to_string();
        assert!(message.contains("12"));
        assert!(message.contains("25"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::AlreadySubmitted("x".into()).error_code(),
            "ALREADY_SUBMITTED"
        );
        assert_eq!(
            AppError::InsufficientPool {
                available: 1,
                requested: 2
            }
            .error_code(),
            "INSUFFICIENT_POOL"
        );
    }
}
