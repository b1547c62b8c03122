//! Generation engine: validators, generators, and the shared error contract.
//!
//! Every generator lives here as a pure function over validated parameters
//! and an injected randomness source. Inbound adapters normalize query
//! strings into the `*Params` types, call `validate()`, and serialize the
//! resulting payload; nothing in this module knows about HTTP.

pub mod calendar;
pub mod color;
pub mod error;
pub mod games;
pub mod geo;
pub mod numbers;
pub mod rng;
pub mod selection;
pub mod text;
pub(crate) mod validate;

pub use self::error::{GenerationError, GenerationResult};
