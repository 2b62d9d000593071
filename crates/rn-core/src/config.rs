//! Pipeline configuration.

use crate::{CoreError, CoreResult, DEFAULT_SPEED_KMH, SampleRng, TravelSpeed};

/// Number of nodes kept in the display subgraph.
pub const DEFAULT_SAMPLE_TARGET: usize = 100;

/// Upper bound on `sampled + queued` nodes during the sampling walk.
pub const DEFAULT_SAMPLE_QUEUE_CAP: usize = 1_000;

/// Top-level run configuration.
///
/// Built by the application crate (from CLI flags) and passed to the
/// pipeline.  Call [`validate`](Self::validate) before use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Average speed for the distance → time conversion.  Default: 30 km/h.
    pub speed_kmh: f64,

    /// Nodes in the display subgraph.  Default: 100.
    pub sample_target: usize,

    /// Safety bound on the sampling walk's `sampled + queued` count.
    /// Must be at least `sample_target`.  Default: 1000.
    pub sample_queue_cap: usize,

    /// Sampler seed.  `None` seeds from OS entropy, so every run draws a
    /// different subgraph.
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Check value ranges and return the validated speed.
    pub fn validate(&self) -> CoreResult<TravelSpeed> {
        let speed = TravelSpeed::new(self.speed_kmh)?;
        if self.sample_target == 0 {
            return Err(CoreError::Config("sample target must be at least 1".into()));
        }
        if self.sample_queue_cap < self.sample_target {
            return Err(CoreError::Config(format!(
                "sample queue cap ({}) is smaller than the sample target ({})",
                self.sample_queue_cap, self.sample_target
            )));
        }
        Ok(speed)
    }

    /// Construct the sampler RNG described by `seed`.
    pub fn make_rng(&self) -> SampleRng {
        match self.seed {
            Some(seed) => SampleRng::new(seed),
            None => SampleRng::from_entropy(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            speed_kmh:        DEFAULT_SPEED_KMH,
            sample_target:    DEFAULT_SAMPLE_TARGET,
            sample_queue_cap: DEFAULT_SAMPLE_QUEUE_CAP,
            seed:             None,
        }
    }
}
