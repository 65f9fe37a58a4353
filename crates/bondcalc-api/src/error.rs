//! API error types.
//!
//! Every error is rendered in the same envelope:
//!
//! ```json
//! {"statusCode": 400, "message": ["Face value is required"], "error": "Bad Request"}
//! ```
//!
//! Validation failures carry one message per failing field; everything else
//! carries a single string.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bondcalc_bonds::BondError;
use bondcalc_core::{CoreError, ValidationErrors};
use thiserror::Error;

use crate::dto::{ErrorMessage, ErrorResponse};

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Bad request (malformed body).
    #[error("{0}")]
    BadRequest(String),

    /// Route not found.
    #[error("{0}")]
    NotFound(String),

    /// Calculation failed for valid inputs.
    #[error("{0}")]
    CalculationFailed(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CalculationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response envelope for this error.
    pub fn to_response_body(&self) -> ErrorResponse {
        let status = self.status();
        let message = match self {
            ApiError::Validation(errors) => ErrorMessage::Many(errors.messages()),
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::CalculationFailed(message)
            | ApiError::Internal(message) => ErrorMessage::One(message.clone()),
        };

        ErrorResponse {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

// Conversions from domain errors
impl From<BondError> for ApiError {
    fn from(err: BondError) -> Self {
        match err {
            BondError::Validation(errors) | BondError::CoreError(CoreError::Validation(errors)) => {
                ApiError::Validation(errors)
            }
            BondError::NoYieldInRange { .. }
            | BondError::YieldSolverFailed(_)
            | BondError::CashFlowFailed { .. } => ApiError::CalculationFailed(err.to_string()),
            BondError::CoreError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
