//! Randomness source injected into every generator.
//!
//! Generators are generic over [`rand::Rng`] so tests can substitute a
//! seeded source and reproduce a draw sequence exactly. Handlers obtain a
//! fresh per-request source here; requests never share generator state.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fresh entropy-seeded source for one request.
pub fn request_rng() -> SmallRng {
    SmallRng::from_entropy()
}

/// Deterministic source for reproducing draws in tests.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
