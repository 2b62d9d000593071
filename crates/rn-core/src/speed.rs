//! Distance → travel-time conversion.
//!
//! Every street segment is weighted with an estimated traversal time derived
//! from its length and a single average speed:
//!
//! ```text
//! minutes = round2((length_m / 1000 / speed_kmh) * 60)
//! ```
//!
//! The speed is a value passed to the adjacency builder, not process state,
//! so tests can run the same graph at several speeds.

use crate::{CoreError, CoreResult};

/// Average urban driving speed used when none is configured.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// A validated average speed in km/h.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelSpeed {
    kmh: f64,
}

impl TravelSpeed {
    /// Create a speed.  Fails for zero, negative, or non-finite values.
    pub fn new(kmh: f64) -> CoreResult<Self> {
        if !kmh.is_finite() || kmh <= 0.0 {
            return Err(CoreError::Config(format!(
                "average speed must be a positive number of km/h, got {kmh}"
            )));
        }
        Ok(Self { kmh })
    }

    #[inline]
    pub fn kmh(self) -> f64 {
        self.kmh
    }

    /// Traversal time in minutes for `distance_m` metres, rounded to two
    /// decimal places.
    #[inline]
    pub fn minutes_for(self, distance_m: f64) -> f64 {
        let minutes = (distance_m / 1000.0 / self.kmh) * 60.0;
        round2(minutes)
    }
}

impl Default for TravelSpeed {
    fn default() -> Self {
        Self { kmh: DEFAULT_SPEED_KMH }
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
