//! HTTP failure envelope and mapping from domain validation errors.
//!
//! Keeps the domain free of transport concerns: [`GenerationError`] carries
//! only code and message; the HTTP 400 status and the
//! `{status, error, message, code}` body shape are attached here.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::GenerationError;

/// Failure envelope: `{status: 400, error: true, message, code}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status, echoed in the body; always 400 for validation failures.
    #[schema(example = 400)]
    pub status: u16,
    /// Always `true` in the failure envelope.
    pub error: bool,
    /// Human-readable message.
    #[schema(example = "La cantidad debe ser mayor a 0.")]
    pub message: String,
    /// Stable code, unique per (generator, failure reason) pair.
    #[schema(example = 1001)]
    pub code: u16,
}

/// Adapter-level error wrapper for handler results.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ApiError(#[from] GenerationError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        // Generator logic produces no 5xx path; every failure is client-caused.
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: self.status_code().as_u16(),
            error: true,
            message: self.0.message().to_owned(),
            code: self.0.code(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
