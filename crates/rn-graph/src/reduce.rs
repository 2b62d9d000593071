//! Reduction to the largest connected component.

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use rn_core::NodeId;

use crate::components::Component;
use crate::graph::RoadGraph;

/// Result of [`reduce_to_largest`].
#[derive(Clone, Debug)]
pub struct Reduction {
    /// The retained graph.
    pub graph: RoadGraph,
    /// Components in the input graph.
    pub component_count: usize,
    /// Nodes retained.
    pub kept: usize,
    /// Nodes dropped with the smaller components.
    pub dropped: usize,
}

/// The component with the most nodes.
///
/// Ties go to the component that comes first in `components`, i.e. the first
/// one discovered.  `None` only for an empty list.
pub fn largest_component(components: &[Component]) -> Option<&Component> {
    let mut best: Option<&Component> = None;
    for c in components {
        if best.is_none_or(|b| c.len() > b.len()) {
            best = Some(c);
        }
    }
    best
}

/// Restrict `graph` to its largest component.
///
/// `components` must be the partition returned by
/// [`find_components`](crate::find_components) for this graph.  With at most
/// one component the graph is returned as is.
pub fn reduce_to_largest(graph: RoadGraph, components: &[Component]) -> Reduction {
    let total = graph.node_count();
    let component_count = components.len();

    let Some(largest) = largest_component(components).filter(|_| component_count > 1) else {
        info!(nodes = total, "network is fully connected; nothing to reduce");
        return Reduction { graph, component_count, kept: total, dropped: 0 };
    };

    let keep: FxHashSet<NodeId> = largest.iter().copied().collect();
    let reduced = graph.restricted_to(&keep);
    let kept = reduced.node_count();

    warn!(
        components = component_count,
        kept,
        dropped = total - kept,
        "network is fragmented; keeping the largest component"
    );

    Reduction {
        graph: reduced,
        component_count,
        kept,
        dropped: total - kept,
    }
}
