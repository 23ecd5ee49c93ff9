//! Replay tokens: `(seed, index)` pairs that address one sample in a stream.
//!
//! A run draws sample `i` from `ReplayToken { seed, index: i }.rng()`, so any row
//! can be regenerated on its own without replaying the rows before it.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Fresh RNG for this token.
    #[inline]
    pub fn rng(self) -> StdRng {
        StdRng::seed_from_u64(self.mixed_seed())
    }

    /// Token for the next index under the same seed.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn mixed_seed(self) -> u64 {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)))
    }
}
