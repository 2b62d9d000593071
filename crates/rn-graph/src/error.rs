//! Graph-subsystem error type.

use thiserror::Error;

use rn_core::{CoreError, NodeId};

/// Errors produced by `rn-graph`.
///
/// All of these are precondition violations on the raw data or the run
/// configuration; the pipeline never attempts partial recovery.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge #{edge_index} references {node}, which is not in the node list")]
    UndeclaredNode { edge_index: usize, node: NodeId },

    #[error("edge #{edge_index} has invalid length {length_m}")]
    InvalidLength { edge_index: usize, length_m: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
