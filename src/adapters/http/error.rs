//! Domain error to HTTP response mapping, shared by every API module.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, e.g. the offending field name.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    /// Create a new error response without details.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
///
/// Recoverable codes map to 4xx statuses with the domain message in the
/// body; infrastructure codes map to a generic 500 whose body never
/// leaks the underlying failure.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::AccountTaken | ErrorCode::SlotFull | ErrorCode::ProgramFull => {
            StatusCode::CONFLICT
        }
        ErrorCode::MemberNotFound
        | ErrorCode::VenueNotFound
        | ErrorCode::SlotNotFound
        | ErrorCode::ProgramNotFound
        | ErrorCode::RegistrationNotFound
        | ErrorCode::EnrollmentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for(self.0.code);

        let body = if self.0.code.is_recoverable() {
            ErrorResponse {
                error_code: self.0.code.to_string(),
                message: self.0.message,
                details: self.0.details,
            }
        } else {
            error!(code = %self.0.code, message = %self.0.message, "request failed");
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_status(err: DomainError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn capacity_errors_map_to_conflict() {
        let err = DomainError::new(ErrorCode::SlotFull, "This slot is fully booked");
        assert_eq!(response_status(err), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_errors_map_to_404() {
        let err = DomainError::new(ErrorCode::RegistrationNotFound, "Registration not found");
        assert_eq!(response_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_map_to_422() {
        let err = DomainError::validation("age", "Field 'age' must be between 18 and 70");
        assert_eq!(response_status(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn infrastructure_errors_hide_the_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serializes_without_empty_details() {
        let body = ErrorResponse::new("SLOT_FULL", "This slot is fully booked");
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("details"));
    }
}
