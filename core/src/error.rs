use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by module setters, structural accessors and graph validation.
///
/// Evaluation itself never returns an error; see [`crate::NoiseGraph::validate`]
/// for checking a graph before sampling it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Reserved for conditions outside the other kinds.
    #[error("unknown noise error")]
    Unknown,

    /// A parameter was outside its valid range, or a module handle did not
    /// refer to the expected kind of module.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A source slot that was never connected was queried.
    #[error("source module {index} of node {node} is not connected")]
    MissingSourceModule { node: NodeId, index: usize },

    /// Storage for a module parameter could not be allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// The node is reachable from itself through its source slots.
    #[error("cycle detected through node {0}")]
    CyclicGraph(NodeId),

    /// Every problem found while validating a graph.
    #[error("graph validation failed with {} error(s)", .0.len())]
    InvalidGraph(Vec<NoiseError>),
}

impl NoiseError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

pub type NoiseResult<T> = Result<T, NoiseError>;
