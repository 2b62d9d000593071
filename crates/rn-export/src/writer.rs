//! The `TableWriter` trait implemented by table backends.

use rn_graph::EdgeRecord;

use crate::{ExportResult, NodeRow};

/// Sink for the two output tables.
pub trait TableWriter {
    /// Write a batch of undirected edge rows.
    fn write_edges(&mut self, rows: &[EdgeRecord]) -> ExportResult<()>;

    /// Write a batch of node rows.
    fn write_nodes(&mut self, rows: &[NodeRow]) -> ExportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ExportResult<()>;
}
