//! CSV loader for raw node and edge records.
//!
//! # CSV format
//!
//! Nodes (`x` = longitude, `y` = latitude):
//!
//! ```csv
//! id,x,y
//! 3374719140,-76.9981,-11.9760
//! 3374719148,-76.9975,-11.9756
//! ```
//!
//! Edges (directed as exported; `length`, `oneway`, `name` may be empty):
//!
//! ```csv
//! origin,destination,length,oneway,name
//! 3374719140,3374719148,82.4,false,Av. Próceres de la Independencia
//! 3374719148,3374719140,,,
//! ```
//!
//! **`oneway`** field: empty, `false`, `False`, `FALSE`, `0`, and `no` mean
//! two-way; anything else means one-way.  See [`parse_oneway`].
//!
//! Rows with an empty or non-numeric `origin`/`destination` abort the load.
//! The loader does not check that edge endpoints were declared; the
//! adjacency builder rejects those.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use rn_core::NodeId;
use rn_graph::{RawEdge, RawNetwork, RawNode};

use crate::{SourceError, SourceResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id: i64,
    x:  f64,
    y:  f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    origin:      i64,
    destination: i64,
    length:      Option<f64>,
    oneway:      Option<String>,
    name:        Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a node file and an edge file.
pub fn load_network_csv(nodes: &Path, edges: &Path) -> SourceResult<RawNetwork> {
    let open = |path: &Path| {
        File::open(path).map_err(|source| SourceError::Open { path: path.to_path_buf(), source })
    };
    let network = load_network_readers(open(nodes)?, open(edges)?)?;
    info!(
        nodes = network.nodes.len(),
        edges = network.edges.len(),
        "raw network loaded from CSV"
    );
    Ok(network)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from streams.
pub fn load_network_readers<N: Read, E: Read>(nodes: N, edges: E) -> SourceResult<RawNetwork> {
    Ok(RawNetwork::new(read_nodes(nodes)?, read_edges(edges)?))
}

/// Resolve an export's one-way spelling into the tri-state flag.
///
/// `None` for an absent value; `Some(false)` for the falsy spellings
/// `false`/`False`/`FALSE`/`0`/`no`; `Some(true)` for everything else
/// (`yes`, `true`, `1`, …).  Exports are expected to have oriented their
/// edges already; OSM tags go through `osm::way_direction` instead.
pub fn parse_oneway(raw: Option<&str>) -> Option<bool> {
    let v = raw.map(str::trim).filter(|v| !v.is_empty())?;
    Some(!matches!(v, "false" | "False" | "FALSE" | "0" | "no"))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_nodes<R: Read>(reader: R) -> SourceResult<Vec<RawNode>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut nodes = Vec::new();
    for (i, result) in rdr.deserialize::<NodeRecord>().enumerate() {
        let rec = result.map_err(|e| parse_error("nodes", i, e))?;
        nodes.push(RawNode { id: NodeId(rec.id), x: rec.x, y: rec.y });
    }
    Ok(nodes)
}

fn read_edges<R: Read>(reader: R) -> SourceResult<Vec<RawEdge>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut edges = Vec::new();
    for (i, result) in rdr.deserialize::<EdgeRecord>().enumerate() {
        let rec = result.map_err(|e| parse_error("edges", i, e))?;
        edges.push(RawEdge {
            origin:      NodeId(rec.origin),
            destination: NodeId(rec.destination),
            length_m:    rec.length,
            oneway:      parse_oneway(rec.oneway.as_deref()),
            name:        rec.name.filter(|n| !n.trim().is_empty()),
        });
    }
    Ok(edges)
}

/// Data rows are numbered from 1, not counting the header.
fn parse_error(file: &'static str, index: usize, e: csv::Error) -> SourceError {
    SourceError::Parse { file, row: index as u64 + 1, message: e.to_string() }
}
