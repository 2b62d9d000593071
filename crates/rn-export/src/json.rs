//! JSON export of the full retained network for an external map renderer.
//!
//! ```json
//! {
//!   "nodes": [{ "node_id": 1, "lat": -12.0, "lon": -77.0 }, …],
//!   "edges": [{ "from_node": 1, "to_node": 2, "distance_meters": 82.4,
//!               "time_minutes": 0.16, "street_name": "no name" }, …]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use rn_graph::{EdgeRecord, RoadGraph};

use crate::{ExportResult, node_rows};

/// Network document for `graph` with its undirected edge table.
pub fn network_json(graph: &RoadGraph, edges: &[EdgeRecord]) -> Value {
    let nodes: Vec<Value> = node_rows(graph)
        .iter()
        .map(|r| json!({ "node_id": r.node_id.raw(), "lat": r.latitude, "lon": r.longitude }))
        .collect();

    let edges: Vec<Value> = edges
        .iter()
        .map(|e| {
            json!({
                "from_node":       e.origin.raw(),
                "to_node":         e.destination.raw(),
                "distance_meters": e.distance_meters,
                "time_minutes":    e.time_minutes,
                "street_name":     e.street_name,
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

/// Write [`network_json`] to `path`, pretty-printed.
pub fn write_network_json(graph: &RoadGraph, edges: &[EdgeRecord], path: &Path) -> ExportResult<()> {
    let doc = network_json(graph, edges);
    fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
