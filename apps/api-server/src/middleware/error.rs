//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use enroll_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            // Expected traffic: the caller corrects the input and retries.
            AppError::Validation(errors) => ErrorResponse::validation_failed(errors.clone()),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                // Log internal errors; the response body stays generic.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from registration outcomes.
//
// The duplicate message is identical whether the pre-check or the store's
// uniqueness constraint detected the duplicate, so responses do not reveal
// which path fired.
impl From<enroll_core::RegistrationError> for AppError {
    fn from(err: enroll_core::RegistrationError) -> Self {
        match err {
            enroll_core::RegistrationError::Validation(errors) => AppError::Validation(errors),
            enroll_core::RegistrationError::DuplicateEmail => {
                AppError::Conflict("Email already registered".to_string())
            }
            enroll_core::RegistrationError::Storage => {
                // Diagnostic context was already logged at the failure site.
                AppError::Internal("Registration storage failure".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
