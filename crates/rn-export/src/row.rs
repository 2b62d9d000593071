//! Plain data rows written by the table backends.

use rn_core::NodeId;
use rn_graph::RoadGraph;

/// One row of the node table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRow {
    pub node_id:   NodeId,
    pub latitude:  f64,
    pub longitude: f64,
}

/// Node table rows for every node in `graph`, sorted by id.
pub fn node_rows(graph: &RoadGraph) -> Vec<NodeRow> {
    graph
        .sorted_node_ids()
        .into_iter()
        .filter_map(|id| {
            graph.position(id).map(|p| NodeRow {
                node_id:   id,
                latitude:  p.lat,
                longitude: p.lon,
            })
        })
        .collect()
}
