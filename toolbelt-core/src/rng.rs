//! Deterministic seed derivation.
//!
//! A master seed is expanded into sub-seeds per `(label, iteration)` with
//! BLAKE3. Each consumer (a CLI subcommand, a test case) gets its own stream,
//! and printing the master seed is enough to replay a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Master seed from which labelled RNG streams are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSource {
    master_seed: u64,
}

impl SeedSource {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Draw a fresh master seed from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for `(label, iteration)`.
    ///
    /// Derivation is hash-based, so it does not depend on which other labels
    /// were derived before.
    pub fn sub_seed(&self, label: &str, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Seeded `StdRng` for `(label, iteration)`.
    pub fn rng_for(&self, label: &str, iteration: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(label, iteration))
    }
}
