//! Route handlers.

pub mod bonds;
pub mod health;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {} {}", method, uri.path()))
}
