//! Undirected edge table.
//!
//! The adjacency stores a two-way street as two arcs; downstream consumers
//! want it once.  Each unordered pair `{u, v}` is emitted a single time as
//! `(min, max)`, using whichever arc is met first when walking nodes in
//! ascending id order and each node's arcs in insertion order.  Parallel
//! segments between the same pair collapse into that first one.

use rustc_hash::FxHashSet;

use rn_core::NodeId;

use crate::graph::RoadGraph;

/// Label written for segments whose export had no street name.
pub const UNNAMED_STREET: &str = "no name";

/// One row of the undirected edge table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    /// Smaller endpoint.
    pub origin:          NodeId,
    /// Larger endpoint.
    pub destination:     NodeId,
    pub distance_meters: f64,
    pub time_minutes:    f64,
    pub street_name:     String,
}

/// Collapse the adjacency into one record per undirected pair.
pub fn canonical_edges(graph: &RoadGraph) -> Vec<EdgeRecord> {
    let mut seen: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
    let mut out = Vec::new();

    for u in graph.sorted_node_ids() {
        for e in graph.neighbors(u) {
            let v = e.neighbor;
            let pair = if u <= v { (u, v) } else { (v, u) };
            if !seen.insert(pair) {
                continue;
            }
            let street_name = graph
                .street_name(u, v)
                .unwrap_or(UNNAMED_STREET)
                .to_owned();
            out.push(EdgeRecord {
                origin:          pair.0,
                destination:     pair.1,
                distance_meters: e.length_m,
                time_minutes:    e.time_min,
                street_name,
            });
        }
    }
    out
}
