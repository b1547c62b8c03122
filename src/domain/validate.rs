//! Shared validation predicates for count- and length-like parameters.
//!
//! Codes for these cross-cutting checks are fixed: 1001 for a non-positive
//! count, 1000 for a count above [`MAX_COUNT`], 1002/1003 for length bounds.
//! Range, ordering, and format checks carry per-generator codes and live
//! beside their generators.

use super::error::{GenerationError, GenerationResult};

/// Upper bound on every count-like parameter, keeping per-request work bounded.
pub const MAX_COUNT: i64 = 100;

/// Upper bound on password and binary-string lengths.
pub const MAX_LENGTH: i64 = 128;

/// Validate a count-like parameter against `[1, MAX_COUNT]`.
///
/// `too_small` and `too_large` carry the endpoint-specific wording; the
/// codes are shared across all generators.
pub(crate) fn checked_count(
    value: i64,
    too_small: &str,
    too_large: &str,
) -> GenerationResult<usize> {
    if value <= 0 {
        return Err(GenerationError::new(1001, too_small));
    }
    if value > MAX_COUNT {
        return Err(GenerationError::new(1000, too_large));
    }
    Ok(value as usize)
}

/// Validate a length-like parameter against `[1, MAX_LENGTH]`.
pub(crate) fn checked_length(value: i64) -> GenerationResult<usize> {
    if value <= 0 {
        return Err(GenerationError::new(1002, "La longitud debe ser mayor a 0."));
    }
    if value > MAX_LENGTH {
        return Err(GenerationError::new(
            1003,
            "La longitud debe ser menor a 128.",
        ));
    }
    Ok(value as usize)
}
