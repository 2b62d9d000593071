//! Raw records as they come out of a loader.
//!
//! These mirror the map export one-to-one: nothing is resolved, defaulted,
//! or validated yet.  The [`AdjacencyBuilder`](crate::AdjacencyBuilder)
//! turns them into a [`RoadGraph`](crate::RoadGraph).

use rn_core::NodeId;

/// A declared network node.  `x` is longitude, `y` latitude.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNode {
    pub id: NodeId,
    pub x:  f64,
    pub y:  f64,
}

/// A directed street segment from the export.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEdge {
    pub origin:      NodeId,
    pub destination: NodeId,
    /// Physical length in metres.  `None` falls back to
    /// [`DEFAULT_EDGE_LENGTH_M`](crate::DEFAULT_EDGE_LENGTH_M).
    pub length_m:    Option<f64>,
    /// Tri-state one-way flag.  `None` and `Some(false)` both mean the
    /// street is two-way.
    pub oneway:      Option<bool>,
    pub name:        Option<String>,
}

impl RawEdge {
    /// A two-way, unnamed segment of known length.
    pub fn road(origin: NodeId, destination: NodeId, length_m: f64) -> Self {
        Self {
            origin,
            destination,
            length_m: Some(length_m),
            oneway: None,
            name: None,
        }
    }

    /// Whether the segment is traversable in reverse.
    #[inline]
    pub fn is_two_way(&self) -> bool {
        !self.oneway.unwrap_or(false)
    }
}

/// Everything a loader produced for one extract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawNetwork {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

impl RawNetwork {
    pub fn new(nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> Self {
        Self { nodes, edges }
    }
}
