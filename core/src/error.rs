use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by graph construction and traversal.
///
/// There is exactly one failure mode: a caller naming a node the graph
/// does not hold. It is never recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: node {0} is not in the graph")]
    InvalidArgument(NodeId),
}
