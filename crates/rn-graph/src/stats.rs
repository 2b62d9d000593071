//! Summary statistics for a road graph.

use std::fmt;

use crate::graph::RoadGraph;

/// Headline numbers reported at the end of a run.
///
/// Undirected quantities are derived by halving the directed ones, which is
/// exact when every street is two-way and an approximation otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphStats {
    /// Intersections / way vertices.
    pub nodes: usize,
    /// Directed adjacency entries.
    pub arcs: usize,
    /// `arcs / 2`.
    pub approx_streets: usize,
    /// Sum of arc lengths / 2, in kilometres.
    pub total_length_km: f64,
    /// `arcs / nodes`; 0 for an empty graph.
    pub mean_degree: f64,
    /// Components before reduction.
    pub components: usize,
}

impl GraphStats {
    pub fn compute(graph: &RoadGraph, components: usize) -> Self {
        let nodes = graph.node_count();
        let arcs = graph.arc_count();
        let total_m: f64 = graph
            .adjacency
            .values()
            .flat_map(|v| v.iter().map(|e| e.length_m))
            .sum();
        let mean_degree = if nodes > 0 { arcs as f64 / nodes as f64 } else { 0.0 };

        Self {
            nodes,
            arcs,
            approx_streets: arcs / 2,
            total_length_km: total_m / 2.0 / 1000.0,
            mean_degree,
            components,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.components <= 1
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Intersections (nodes):      {}", self.nodes)?;
        writeln!(f, "Streets (edges, approx.):   {}", self.approx_streets)?;
        writeln!(
            f,
            "Connectivity:               {}",
            if self.is_connected() {
                "connected".to_owned()
            } else {
                format!("{} components, largest kept", self.components)
            }
        )?;
        writeln!(f, "Total street length:        {:.2} km", self.total_length_km)?;
        write!(f, "Mean degree:                {:.2}", self.mean_degree)
    }
}
