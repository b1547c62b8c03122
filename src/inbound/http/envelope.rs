//! Uniform success envelope around generator payloads.

use serde::Serialize;

/// Success wrapper: `{status: 200, error: false, ..payload fields}`.
///
/// The envelope never mixes a success payload with a non-200 status; the
/// failure shape lives in [`super::error`].
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: u16,
    error: bool,
    #[serde(flatten)]
    payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a generator payload in the success envelope.
    pub fn ok(payload: T) -> Self {
        Self {
            status: 200,
            error: false,
            payload,
        }
    }
}
