//! `rn-export` — output writers for the cleaned network.
//!
//! | Module     | Output                                                       |
//! |------------|--------------------------------------------------------------|
//! | [`csv`]    | `edges.csv`, `nodes.csv` via [`TableWriter`]                 |
//! | [`dot`]    | Graphviz source of the display subgraph                      |
//! | [`json`]   | node coordinates + undirected edges of the full network      |
//!
//! Column names and order of the two tables are fixed; downstream consumers
//! read them by position.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_export::{CsvTableWriter, TableWriter, node_rows};
//!
//! let mut w = CsvTableWriter::new(Path::new("./output"))?;
//! w.write_edges(&out.edges)?;
//! w.write_nodes(&node_rows(&out.graph))?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod dot;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use crate::csv::{CsvTableWriter, EDGE_COLUMNS, NODE_COLUMNS};
pub use dot::{render_dot, write_dot};
pub use error::{ExportError, ExportResult};
pub use json::{network_json, write_network_json};
pub use row::{NodeRow, node_rows};
pub use writer::TableWriter;
