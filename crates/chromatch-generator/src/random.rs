//! The randomness seam used by target generation.

use rand::{Rng as _, RngCore};

/// A source of uniformly distributed integers.
///
/// Every [`rand::RngCore`] is a `RandomSource`, so both a thread-local
/// generator and a seeded [`rand_pcg::Pcg64`] can drive generation. Tests can
/// substitute [`ScriptedSource`](crate::testing::ScriptedSource) to replay
/// exact draws.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `min..=max`.
    ///
    /// Callers guarantee `min <= max`.
    fn random_int(&mut self, min: u32, max: u32) -> u32;
}

impl<R> RandomSource for R
where
    R: RngCore,
{
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.random_range(min..=max)
    }
}
