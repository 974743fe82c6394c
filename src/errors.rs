// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpRequest, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a handler can surface to a client
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error")]
    InternalError,
}

impl GuideError {
    fn code(&self) -> &'static str {
        match self {
            GuideError::NotFound(_) => "NOT_FOUND",
            GuideError::InvalidInput(_) => "INVALID_INPUT",
            GuideError::ValidationError(_) => "VALIDATION_ERROR",
            GuideError::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Convert GuideError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
/// `detail` carries the human-readable message, `error` the machine-readable envelope
impl ResponseError for GuideError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();

        let body = json!({
            "detail": message,
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GuideError::NotFound(_) => StatusCode::NOT_FOUND,
            GuideError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GuideError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GuideError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Turn malformed or incomplete JSON bodies into a 400 with the usual envelope
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    log::info!("JSON payload error on {}: {}", req.path(), err);
    GuideError::InvalidInput(err.to_string()).into()
}

/// Fallback for routes that do not exist
pub async fn not_found() -> Result<HttpResponse, GuideError> {
    Err(GuideError::NotFound("Resource not found".to_string()))
}
