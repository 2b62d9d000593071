//! In-memory road graph.
//!
//! # Data layout
//!
//! Node ids are sparse (OSM ids), so the graph is a pair of hash maps keyed
//! by `NodeId` rather than the dense CSR arrays a router would want:
//!
//! ```text
//! nodes:     NodeId → GeoPoint
//! adjacency: NodeId → [AdjEntry { neighbor, length_m, time_min }, …]
//! ```
//!
//! Every node in `nodes` has an adjacency vector (possibly empty) and vice
//! versa.  Parallel arcs between the same pair stay as separate entries;
//! they are only collapsed when the undirected edge table is emitted.
//!
//! Hash-map iteration order is unspecified, so anything order-sensitive
//! (component tie-breaks, sampling, exports) goes through
//! [`RoadGraph::sorted_node_ids`].

use rustc_hash::{FxHashMap, FxHashSet};

use rn_core::{GeoPoint, NodeId};

/// One outgoing arc of a node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjEntry {
    pub neighbor: NodeId,
    pub length_m: f64,
    pub time_min: f64,
}

/// Weighted road graph.  Construct with [`AdjacencyBuilder`](crate::AdjacencyBuilder).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadGraph {
    /// Coordinates of every retained node.
    pub nodes: FxHashMap<NodeId, GeoPoint>,

    /// Outgoing arcs of every retained node.
    pub adjacency: FxHashMap<NodeId, Vec<AdjEntry>>,

    /// Street name per directed arc, where the export had one.
    pub street_names: FxHashMap<(NodeId, NodeId), String>,
}

impl RoadGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed adjacency entries (a two-way street counts twice).
    pub fn arc_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Outgoing arcs of `node`; empty for unknown nodes.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[AdjEntry] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.nodes.get(&node).copied()
    }

    /// Street name recorded for the arc `from → to`, if any.
    pub fn street_name(&self, from: NodeId, to: NodeId) -> Option<&str> {
        self.street_names.get(&(from, to)).map(String::as_str)
    }

    /// All node ids in ascending order.
    pub fn sorted_node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Reverse arcs: for every `u → v` an entry `v ← u`.  Used to walk the
    /// graph as undirected during component discovery.
    pub fn predecessors(&self) -> FxHashMap<NodeId, Vec<NodeId>> {
        let mut preds: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
        for (&from, entries) in &self.adjacency {
            for e in entries {
                preds.entry(e.neighbor).or_default().push(from);
            }
        }
        preds
    }

    // ── Restriction ───────────────────────────────────────────────────────

    /// Copy of the graph restricted to `keep`.  Arcs with either end outside
    /// `keep` are dropped, as are their street names.  Ids in `keep` that are
    /// not in the graph are ignored.
    pub fn restricted_to(&self, keep: &FxHashSet<NodeId>) -> RoadGraph {
        let nodes: FxHashMap<NodeId, GeoPoint> = self
            .nodes
            .iter()
            .filter(|(id, _)| keep.contains(*id))
            .map(|(&id, &pos)| (id, pos))
            .collect();

        let adjacency = induced_adjacency(&self.adjacency, keep);

        let street_names = self
            .street_names
            .iter()
            .filter(|((a, b), _)| keep.contains(a) && keep.contains(b))
            .map(|(&k, v)| (k, v.clone()))
            .collect();

        RoadGraph { nodes, adjacency, street_names }
    }
}

/// Adjacency restricted to `keep`: only keys in `keep`, only entries whose
/// neighbor is in `keep`.
pub(crate) fn induced_adjacency(
    adjacency: &FxHashMap<NodeId, Vec<AdjEntry>>,
    keep: &FxHashSet<NodeId>,
) -> FxHashMap<NodeId, Vec<AdjEntry>> {
    adjacency
        .iter()
        .filter(|(id, _)| keep.contains(*id))
        .map(|(&id, entries)| {
            let kept: Vec<AdjEntry> = entries
                .iter()
                .filter(|e| keep.contains(&e.neighbor))
                .copied()
                .collect();
            (id, kept)
        })
        .collect()
}
