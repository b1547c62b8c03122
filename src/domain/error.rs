//! Validation errors shared by every generator.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto the
//! `{status: 400, error: true, message, code}` envelope; generator logic
//! never produces a server-fault path.

use thiserror::Error;

/// Client-facing validation failure.
///
/// ## Invariants
/// - `code` is unique per (generator, failure reason) pair and stable across
///   releases so clients can branch on it.
/// - Every error maps to HTTP 400; the status is attached at the adapter
///   edge, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    code: u16,
    message: String,
}

impl GenerationError {
    /// Create an error with a stable code and a human-readable message.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Convenient result alias for validators.
pub type GenerationResult<T> = Result<T, GenerationError>;
