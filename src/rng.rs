//! Random source for word selection.
//!
//! Unseeded generators draw from the thread-local entropy RNG; seeded ones
//! hash the seed into a 64-bit state and run a [`StdRng`] from it, so the
//! same seed always replays the same stream within a build of this crate.

use rand::rngs::StdRng;
use rand::rngs::ThreadRng;
use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;

use crate::config::Seed;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A per-call random stream. Never share one across concurrent calls.
#[derive(Debug)]
pub enum WordRng {
    Entropy(ThreadRng),
    Seeded(StdRng),
}

impl WordRng {
    #[must_use]
    pub fn new(seed: Option<&Seed>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(StdRng::seed_from_u64(seed_state(seed))),
            None => Self::Entropy(rand::rng()),
        }
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub(crate) fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index into an empty range");
        let i = (self.next_f64() * len as f64).floor() as usize;
        i.min(len - 1)
    }
}

impl RngCore for WordRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Entropy(rng) => rng.next_u32(),
            Self::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Entropy(rng) => rng.next_u64(),
            Self::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Self::Entropy(rng) => rng.fill_bytes(dst),
            Self::Seeded(rng) => rng.fill_bytes(dst),
        }
    }
}

/// FNV-1a over the seed bytes.
fn seed_state(seed: &Seed) -> u64 {
    seed.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}
