//! JSON error bodies for the HTTP tier

use crate::normalizer::ExtractionFailure;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body shared by every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Errors a handler can answer with
#[derive(Debug)]
pub enum ApiError {
    MissingUrl,
    InvalidUrl,
    /// Classified failure from the normalizer
    Extraction(ExtractionFailure),
    /// Anything unclassified; details stay in the server log
    Internal,
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidUrl => StatusCode::BAD_REQUEST,
            // Transient provider failures are reported as 404 too
            ApiError::Extraction(_) | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let (error, message) = match self {
            ApiError::MissingUrl => (
                "Missing required parameter: url",
                "Please provide a YouTube URL using the url parameter",
            ),
            ApiError::InvalidUrl => ("Invalid URL", "Please provide a valid YouTube URL"),
            ApiError::Extraction(failure) => {
                return ErrorResponse {
                    error: failure.kind.to_string(),
                    message: failure.message.clone(),
                }
            }
            ApiError::Internal => (
                "Internal server error",
                "An error occurred while processing the video URL",
            ),
            ApiError::NotFound => (
                "Endpoint not found",
                "The requested endpoint does not exist",
            ),
        };
        ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<ExtractionFailure> for ApiError {
    fn from(failure: ExtractionFailure) -> Self {
        ApiError::Extraction(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Body for panics caught outside the handlers
pub fn unexpected_error() -> ErrorResponse {
    ErrorResponse {
        error: "Internal server error".to_string(),
        message: "An unexpected error occurred".to_string(),
    }
}
