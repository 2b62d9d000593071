//! Randomized, size-bounded subgraph sampling for display.
//!
//! A full city network is unreadable when drawn node-by-node, so the
//! display render uses a compact neighbourhood: a breadth-first walk from a
//! random node with each node's neighbours shuffled before they are queued.
//!
//! # Policy
//!
//! 1. Graphs with at most `target` nodes are returned whole.
//! 2. Otherwise the walk starts at a uniformly chosen node and dequeues
//!    nodes into the sample until it holds `target` nodes or the queue runs
//!    dry.  New neighbours are only queued while `sampled + queued <
//!    queue_cap`, which bounds memory on dense graphs.
//! 3. If the walk runs dry early, the sample is topped up with a shuffled
//!    selection of the remaining nodes.
//! 4. The adjacency returned is induced: arcs leaving the sample are dropped.
//!
//! All randomness comes from the caller's [`SampleRng`]; a fixed seed gives
//! a fixed sample.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use rn_core::{CoreError, DEFAULT_SAMPLE_QUEUE_CAP, DEFAULT_SAMPLE_TARGET, NodeId, SampleRng};

use crate::graph::{AdjEntry, RoadGraph, induced_adjacency};
use crate::traversal::Bfs;
use crate::GraphResult;

/// Sampler bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    /// Nodes in the sample.
    pub target: usize,
    /// Upper bound on `sampled + queued` while walking.
    pub queue_cap: usize,
}

impl SampleConfig {
    /// Validated bounds: `target >= 1` and `queue_cap >= target`.
    pub fn new(target: usize, queue_cap: usize) -> GraphResult<Self> {
        if target == 0 || queue_cap < target {
            return Err(CoreError::Config(format!(
                "invalid sample bounds: target {target}, queue cap {queue_cap}"
            ))
            .into());
        }
        Ok(Self { target, queue_cap })
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            target:    DEFAULT_SAMPLE_TARGET,
            queue_cap: DEFAULT_SAMPLE_QUEUE_CAP,
        }
    }
}

/// A sampled node subset with its induced adjacency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subgraph {
    /// Sampled nodes in selection order.
    pub nodes: Vec<NodeId>,
    /// Arcs between sampled nodes, keyed by every sampled node.
    pub adjacency: FxHashMap<NodeId, Vec<AdjEntry>>,
}

impl Subgraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing arcs of a sampled node.
    pub fn neighbors(&self, node: NodeId) -> &[AdjEntry] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Draw a display subgraph from `graph`.
///
/// The result always holds `min(cfg.target, graph.node_count())` nodes.
pub fn sample_subgraph(graph: &RoadGraph, cfg: &SampleConfig, rng: &mut SampleRng) -> Subgraph {
    let ids = graph.sorted_node_ids();

    if ids.len() <= cfg.target {
        let keep: FxHashSet<NodeId> = ids.iter().copied().collect();
        return Subgraph {
            adjacency: induced_adjacency(&graph.adjacency, &keep),
            nodes: ids,
        };
    }

    let Some(&start) = rng.choose(&ids) else {
        return Subgraph::default();
    };

    let mut sampled: Vec<NodeId> = Vec::with_capacity(cfg.target);
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut bfs = Bfs::new(start, &mut visited);
    let mut next_hops: Vec<NodeId> = Vec::new();

    while sampled.len() < cfg.target {
        let Some(node) = bfs.pop() else { break };
        sampled.push(node);

        next_hops.clear();
        next_hops.extend(graph.neighbors(node).iter().map(|e| e.neighbor));
        rng.shuffle(&mut next_hops);

        for &next in &next_hops {
            if sampled.len() + bfs.queued() >= cfg.queue_cap {
                break;
            }
            bfs.offer(next);
        }
    }

    let walked = sampled.len();
    if walked < cfg.target {
        let in_sample: FxHashSet<NodeId> = sampled.iter().copied().collect();
        let mut extras: Vec<NodeId> = ids.iter().copied().filter(|n| !in_sample.contains(n)).collect();
        rng.shuffle(&mut extras);
        sampled.extend(extras.into_iter().take(cfg.target - walked));
    }

    debug!(start = start.raw(), walked, filled = sampled.len() - walked, "subgraph sampled");

    let keep: FxHashSet<NodeId> = sampled.iter().copied().collect();
    Subgraph {
        adjacency: induced_adjacency(&graph.adjacency, &keep),
        nodes: sampled,
    }
}
