//! `rn-graph` — weighted road adjacency, connectivity, and display sampling.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`raw`]         | `RawNode`, `RawEdge`, `RawNetwork` (loader output)        |
//! | [`graph`]       | `RoadGraph`, `AdjEntry`                                   |
//! | [`builder`]     | `AdjacencyBuilder` (one-way resolution, length defaults)  |
//! | [`traversal`]   | BFS core shared by component discovery and sampling      |
//! | [`components`]  | `find_components`, `reachable_from`                       |
//! | [`reduce`]      | `largest_component`, `reduce_to_largest`                  |
//! | [`sample`]      | `SampleConfig`, `sample_subgraph`, `Subgraph`             |
//! | [`edges`]       | `canonical_edges` (undirected edge table)                 |
//! | [`stats`]       | `GraphStats`                                              |
//! | [`pipeline`]    | `Pipeline` — build → components → reduce → sample         |
//! | [`error`]       | `GraphError`, `GraphResult<T>`                            |
//!
//! # Pipeline (summary)
//!
//! ```text
//! RawNetwork ──build──▶ RoadGraph ──find_components──▶ Vec<Component>
//!                          │                                 │
//!                          └──────────reduce_to_largest◀─────┘
//!                                          │
//!                          reduced RoadGraph ──sample_subgraph──▶ Subgraph
//! ```

pub mod builder;
pub mod components;
pub mod edges;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod raw;
pub mod reduce;
pub mod sample;
pub mod stats;
pub mod traversal;


pub use builder::{AdjacencyBuilder, DEFAULT_EDGE_LENGTH_M};
pub use components::{Component, find_components, reachable_from};
pub use edges::{EdgeRecord, UNNAMED_STREET, canonical_edges};
pub use error::{GraphError, GraphResult};
pub use graph::{AdjEntry, RoadGraph};
pub use pipeline::{Pipeline, PipelineOutput};
pub use raw::{RawEdge, RawNetwork, RawNode};
pub use reduce::{Reduction, largest_component, reduce_to_largest};
pub use sample::{SampleConfig, Subgraph, sample_subgraph};
pub use stats::GraphStats;
