//! Seedable RNG wrapper for the subgraph sampler.
//!
//! The sampler is the only randomized stage of the pipeline.  It never
//! touches a global generator: callers hand it a `SampleRng`, either seeded
//! (`SampleRng::new(seed)`, reproducible) or seeded from OS entropy
//! (`SampleRng::from_entropy()`, one sample per run).

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random source injected into the sampler.
pub struct SampleRng(SmallRng);

impl SampleRng {
    /// Deterministic generator: the same seed always yields the same sample.
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        SampleRng(SmallRng::from_entropy())
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a uniformly random element.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
