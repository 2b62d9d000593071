//! `rn-source` — raw record loaders.
//!
//! Acquisition is a black box to the rest of the pipeline: anything that
//! yields a [`RawNetwork`](rn_graph::RawNetwork) will do.  Two sources are
//! provided.
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`csv`]   | `load_network_csv`, `load_network_readers`, `parse_oneway`  |
//! | [`osm`]   | `load_from_pbf` (feature = `"osm"` only)                    |
//! | [`error`] | `SourceError`, `SourceResult<T>`                            |

pub mod csv;
pub mod error;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use crate::csv::{load_network_csv, load_network_readers, parse_oneway};
pub use error::{SourceError, SourceResult};
