//! Breadth-first traversal core.
//!
//! Both component discovery and subgraph sampling walk the graph with the
//! same discipline: a FIFO queue plus a visited set, where a node is marked
//! the moment it is enqueued.  Each node therefore moves
//! `unvisited → queued → visited` exactly once per traversal and is never
//! re-queued.
//!
//! [`Bfs`] holds that state and leaves the expansion policy to the caller:
//! unbounded discovery offers every neighbor, the sampler shuffles them and
//! stops offering once its queue cap is hit.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use rn_core::NodeId;

/// Queue + visited-set state of one breadth-first walk.
///
/// The visited set is borrowed so that repeated walks (one per component)
/// can share it.
pub struct Bfs<'v> {
    queue:   VecDeque<NodeId>,
    visited: &'v mut FxHashSet<NodeId>,
}

impl<'v> Bfs<'v> {
    /// Start a walk at `start`.  If `start` is already visited the walk is
    /// empty.
    pub fn new(start: NodeId, visited: &'v mut FxHashSet<NodeId>) -> Self {
        let mut bfs = Self { queue: VecDeque::new(), visited };
        bfs.offer(start);
        bfs
    }

    /// Dequeue the next node to expand.
    #[inline]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    /// Enqueue `node` unless it was seen before.  Returns whether it was
    /// enqueued.
    #[inline]
    pub fn offer(&mut self, node: NodeId) -> bool {
        if self.visited.insert(node) {
            self.queue.push_back(node);
            true
        } else {
            false
        }
    }

    /// Nodes currently waiting in the queue.
    #[inline]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

/// Unbounded walk from `start`: every node reachable through `neighbors`, in
/// dequeue order.  Nodes already in `visited` are neither returned nor
/// expanded.
pub fn bfs_collect<F, I>(start: NodeId, visited: &mut FxHashSet<NodeId>, mut neighbors: F) -> Vec<NodeId>
where
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    let mut out = Vec::new();
    let mut bfs = Bfs::new(start, visited);
    while let Some(node) = bfs.pop() {
        out.push(node);
        for next in neighbors(node) {
            bfs.offer(next);
        }
    }
    out
}
