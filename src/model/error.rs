// Topology validation errors

use super::NodeId;
use thiserror::Error;

/// Rejections raised while building a [`Topology`](super::Topology)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A link endpoint names a node that is not in the node set
    #[error("invalid link reference {from} -> {to}: unknown node `{missing}`")]
    InvalidLinkReference {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// Two nodes share the same identity
    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(NodeId),
}
