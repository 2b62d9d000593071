//! Build → components → reduce → sample, in one call.

use std::time::Instant;

use tracing::info;

use rn_core::{PipelineConfig, SampleRng};

use crate::components::find_components;
use crate::edges::{EdgeRecord, canonical_edges};
use crate::graph::RoadGraph;
use crate::raw::RawNetwork;
use crate::reduce::reduce_to_largest;
use crate::sample::{SampleConfig, Subgraph, sample_subgraph};
use crate::stats::GraphStats;
use crate::GraphResult;

/// Everything downstream exporters need.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Largest component of the built graph.
    pub graph: RoadGraph,
    /// Undirected edge table of `graph`.
    pub edges: Vec<EdgeRecord>,
    /// Display subgraph drawn from `graph`.
    pub sample: Subgraph,
    pub stats: GraphStats,
}

/// One-shot batch transform configured by a [`PipelineConfig`].
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Validate `config` and wrap it.
    pub fn new(config: PipelineConfig) -> GraphResult<Self> {
        config.validate()?;
        SampleConfig::new(config.sample_target, config.sample_queue_cap)?;
        Ok(Self { config })
    }

    /// Run with the RNG described by the config's seed.
    pub fn run(&self, raw: &RawNetwork) -> GraphResult<PipelineOutput> {
        let mut rng = self.config.make_rng();
        self.run_with_rng(raw, &mut rng)
    }

    /// Run with a caller-supplied RNG.
    pub fn run_with_rng(&self, raw: &RawNetwork, rng: &mut SampleRng) -> GraphResult<PipelineOutput> {
        let speed = self.config.validate()?;
        let sample_cfg = SampleConfig::new(self.config.sample_target, self.config.sample_queue_cap)?;

        let t0 = Instant::now();
        let graph = RoadGraph::from_raw(raw, speed)?;
        info!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            speed_kmh = speed.kmh(),
            "adjacency built"
        );

        let components = find_components(&graph);
        info!(components = components.len(), "connectivity checked");

        let reduction = reduce_to_largest(graph, &components);
        let graph = reduction.graph;

        let edges = canonical_edges(&graph);
        let sample = sample_subgraph(&graph, &sample_cfg, rng);
        info!(
            edges = edges.len(),
            sampled = sample.len(),
            target = sample_cfg.target,
            "edge table and display sample ready"
        );

        let stats = GraphStats::compute(&graph, reduction.component_count);
        info!(elapsed_ms = t0.elapsed().as_millis() as u64, "pipeline finished");

        Ok(PipelineOutput { graph, edges, sample, stats })
    }
}
