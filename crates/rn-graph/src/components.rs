//! Connected-component discovery.
//!
//! Components are weakly connected: an arc `u → v` joins `u` and `v` no
//! matter which way it points.  Walking the undirected view makes the
//! result a true partition of the node set, independent of the order in
//! which start nodes are tried.  A one-way street therefore never splits a
//! neighbourhood into two "components".
//!
//! The enumeration order still matters for *which* component is discovered
//! first (the largest-component tie-break), so start nodes are tried in
//! ascending id order.

use rustc_hash::FxHashSet;
use tracing::debug;

use rn_core::NodeId;

use crate::graph::RoadGraph;
use crate::traversal::bfs_collect;

/// Members of one connected component, sorted ascending.
pub type Component = Vec<NodeId>;

/// Partition the graph into weakly connected components.
///
/// Components are returned in discovery order (the component of the smallest
/// id first, and so on); members of each are sorted.
pub fn find_components(graph: &RoadGraph) -> Vec<Component> {
    let preds = graph.predecessors();
    let preds = &preds;
    let mut visited: FxHashSet<NodeId> =
        FxHashSet::with_capacity_and_hasher(graph.node_count(), Default::default());
    let mut components = Vec::new();

    for start in graph.sorted_node_ids() {
        if visited.contains(&start) {
            continue;
        }
        let mut members = bfs_collect(start, &mut visited, move |n| {
            let out = graph.neighbors(n).iter().map(|e| e.neighbor);
            let back = preds.get(&n).into_iter().flatten().copied();
            out.chain(back)
        });
        members.sort_unstable();
        components.push(members);
    }

    debug!(
        nodes = graph.node_count(),
        components = components.len(),
        "component discovery finished"
    );
    components
}

/// Every node reachable from `start` following arcs in their direction,
/// `start` included.  Empty if `start` is not in the graph.
pub fn reachable_from(graph: &RoadGraph, start: NodeId) -> FxHashSet<NodeId> {
    let mut visited = FxHashSet::default();
    if !graph.contains(start) {
        return visited;
    }
    bfs_collect(start, &mut visited, move |n| graph.neighbors(n).iter().map(|e| e.neighbor));
    visited
}
