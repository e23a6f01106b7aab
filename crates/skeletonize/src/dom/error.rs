//! Tree mutation errors.

use thiserror::Error;

use super::NodeId;

/// Error returned when a document mutation is not allowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The operation needs an element but got another kind of node.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// The reference node is not a child of the given parent.
    #[error("node {child} is not a child of node {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The handle does not belong to this document.
    #[error("node {0} does not belong to this document")]
    UnknownNode(NodeId),

    /// The insertion would produce an invalid tree (a cycle, a document
    /// inside another node, or children under a text node).
    #[error("cannot insert node {child} into node {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
