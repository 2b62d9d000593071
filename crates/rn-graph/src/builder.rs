//! Adjacency construction from raw records.
//!
//! # One-way resolution
//!
//! Every raw edge adds the arc `origin → destination`.  Unless the edge is
//! explicitly one-way (`oneway == Some(true)`) the reverse arc
//! `destination → origin` is added too, with the same length and time.
//! Exports frequently omit the tag, so "two-way unless marked" is the
//! permissive reading.
//!
//! # Missing lengths
//!
//! A missing length becomes [`DEFAULT_EDGE_LENGTH_M`] rather than zero, so a
//! gap in the export never produces a free arc.

use rn_core::{GeoPoint, NodeId, TravelSpeed};
use rustc_hash::FxHashMap;

use crate::graph::{AdjEntry, RoadGraph};
use crate::raw::{RawEdge, RawNetwork, RawNode};
use crate::{GraphError, GraphResult};

/// Length substituted for raw edges without one (metres).
pub const DEFAULT_EDGE_LENGTH_M: f64 = 100.0;

/// Build a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes must be added before the edges that reference them.
///
/// # Example
///
/// ```
/// use rn_core::{NodeId, TravelSpeed};
/// use rn_graph::{AdjacencyBuilder, RawEdge, RawNode};
///
/// let mut b = AdjacencyBuilder::new(TravelSpeed::default());
/// b.add_node(RawNode { id: NodeId(1), x: -77.0, y: -12.0 });
/// b.add_node(RawNode { id: NodeId(2), x: -77.1, y: -12.0 });
/// b.add_edge(RawEdge::road(NodeId(1), NodeId(2), 1_000.0)).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.arc_count(), 2); // two-way
/// ```
pub struct AdjacencyBuilder {
    speed:      TravelSpeed,
    nodes:      FxHashMap<NodeId, GeoPoint>,
    adjacency:  FxHashMap<NodeId, Vec<AdjEntry>>,
    names:      FxHashMap<(NodeId, NodeId), String>,
    edges_seen: usize,
}

impl AdjacencyBuilder {
    pub fn new(speed: TravelSpeed) -> Self {
        Self {
            speed,
            nodes:      FxHashMap::default(),
            adjacency:  FxHashMap::default(),
            names:      FxHashMap::default(),
            edges_seen: 0,
        }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(speed: TravelSpeed, nodes: usize) -> Self {
        let mut b = Self::new(speed);
        b.nodes.reserve(nodes);
        b.adjacency.reserve(nodes);
        b
    }

    /// Declare a node.  Re-declaring an id overwrites its coordinates and
    /// keeps any arcs already attached to it.
    pub fn add_node(&mut self, node: RawNode) {
        self.nodes.insert(node.id, GeoPoint::new(node.x, node.y));
        self.adjacency.entry(node.id).or_default();
    }

    /// Add one raw edge, resolving its length, time, and direction.
    ///
    /// # Errors
    ///
    /// [`GraphError::UndeclaredNode`] if either endpoint was never added;
    /// [`GraphError::InvalidLength`] for negative or non-finite lengths.
    pub fn add_edge(&mut self, edge: RawEdge) -> GraphResult<()> {
        let edge_index = self.edges_seen;
        self.edges_seen += 1;

        for node in [edge.origin, edge.destination] {
            if !self.nodes.contains_key(&node) {
                return Err(GraphError::UndeclaredNode { edge_index, node });
            }
        }

        let length_m = edge.length_m.unwrap_or(DEFAULT_EDGE_LENGTH_M);
        if !length_m.is_finite() || length_m < 0.0 {
            return Err(GraphError::InvalidLength { edge_index, length_m });
        }
        let time_min = self.speed.minutes_for(length_m);
        let two_way = edge.is_two_way();

        self.push_arc(edge.origin, edge.destination, length_m, time_min);
        if two_way {
            self.push_arc(edge.destination, edge.origin, length_m, time_min);
        }

        if let Some(name) = edge.name {
            if two_way {
                self.names
                    .entry((edge.destination, edge.origin))
                    .or_insert_with(|| name.clone());
            }
            self.names.entry((edge.origin, edge.destination)).or_insert(name);
        }
        Ok(())
    }

    pub fn build(self) -> RoadGraph {
        RoadGraph {
            nodes:        self.nodes,
            adjacency:    self.adjacency,
            street_names: self.names,
        }
    }

    fn push_arc(&mut self, from: NodeId, to: NodeId, length_m: f64, time_min: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(AdjEntry { neighbor: to, length_m, time_min });
    }
}

impl RoadGraph {
    /// Build a graph from a complete raw extract: all nodes first, then all
    /// edges in input order.
    pub fn from_raw(raw: &RawNetwork, speed: TravelSpeed) -> GraphResult<RoadGraph> {
        let mut b = AdjacencyBuilder::with_capacity(speed, raw.nodes.len());
        for node in &raw.nodes {
            b.add_node(node.clone());
        }
        for edge in &raw.edges {
            b.add_edge(edge.clone())?;
        }
        Ok(b.build())
    }
}
