//! `rn-core` — foundational types for the `roadnet` cleaning pipeline.
//!
//! Every other `rn-*` crate depends on this one.  It has no `rn-*`
//! dependencies and only two external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                                |
//! | [`geo`]      | `GeoPoint`, haversine distance                          |
//! | [`speed`]    | `TravelSpeed` (metres → minutes converter)              |
//! | [`rng`]      | `SampleRng` (seedable source for the subgraph sampler)  |
//! | [`config`]   | `PipelineConfig`                                        |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod speed;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SAMPLE_QUEUE_CAP, DEFAULT_SAMPLE_TARGET, PipelineConfig};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::NodeId;
pub use rng::SampleRng;
pub use speed::{DEFAULT_SPEED_KMH, TravelSpeed};
