//! Response types for the tool rental API.
//!
//! Every failure is reported as an [`ApiError`] body whose [`ErrorCode`]
//! also fixes the HTTP status. [`RentalError`] converts into it directly.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// Machine-readable error code carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A rental period argument was missing or out of range.
    InvalidArgument,
    /// A checkout parameter or request field failed validation.
    ValidationError,
    /// The tool code is not in the catalog.
    ToolNotFound,
    /// The request body is not valid JSON for the endpoint.
    MalformedJson,
    /// The request lacks `Content-Type: application/json`.
    MissingContentType,
    /// The server's catalog configuration is unusable.
    ConfigError,
}

impl ErrorCode {
    /// The HTTP status returned with this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// What went wrong.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Hint pointing at the offending part of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a details hint.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<RentalError> for ApiError {
    fn from(error: RentalError) -> Self {
        let message = error.to_string();
        match error {
            RentalError::InvalidArgument { field, .. } => {
                ApiError::new(ErrorCode::InvalidArgument, message)
                    .details(format!("Check the '{}' field of the request", field))
            }
            RentalError::InvalidRentalDays { .. } | RentalError::InvalidDiscountPercent { .. } => {
                ApiError::new(ErrorCode::ValidationError, message)
            }
            RentalError::ToolNotFound { code } => ApiError::new(ErrorCode::ToolNotFound, message)
                .details(format!("The tool code '{}' is not in the rental catalog", code)),
            RentalError::ConfigNotFound { .. }
            | RentalError::ConfigParseError { .. }
            | RentalError::UnknownToolType { .. } => {
                ApiError::new(ErrorCode::ConfigError, "Configuration error").details(message)
            }
        }
    }
}

/// An [`ApiError`] paired with the status it is sent with.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.code.status(),
            error,
        }
    }
}

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        ApiError::from(error).into()
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}
