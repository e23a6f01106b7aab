//! Normalizing what `init` was asked to transform.

use crate::dom::{Document, NodeId};
use crate::selector::SelectorError;

/// What an initialization call acts on.
///
/// Built with `.into()` from a selector (`&str`/`String`), a single node, a
/// collection of nodes, or `Option<NodeId>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every element matching the selector, in document order.
    Selector(String),
    /// One element.
    Element(NodeId),
    /// A snapshot of a collection of elements.
    Elements(Vec<NodeId>),
    /// Nothing.
    None,
}

impl Target {
    /// Resolves the target into the ordered list of elements to transform.
    ///
    /// Nodes that are not elements, and handles from another document, are
    /// skipped. The list is a snapshot:
    /// transforming one element never changes which elements follow.
    pub fn resolve(&self, document: &Document) -> Result<Vec<NodeId>, SelectorError> {
        match self {
            Target::Selector(selector) => document.query_selector_all(selector),
            Target::Element(node) => Ok(Some(*node)
                .filter(|&node| document.is_element(node))
                .into_iter()
                .collect()),
            Target::Elements(nodes) => Ok(nodes
                .iter()
                .copied()
                .filter(|&node| document.is_element(node))
                .collect()),
            Target::None => Ok(Vec::new()),
        }
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl From<&String> for Target {
    fn from(selector: &String) -> Self {
        Target::Selector(selector.clone())
    }
}

impl From<NodeId> for Target {
    fn from(node: NodeId) -> Self {
        Target::Element(node)
    }
}

impl From<Option<NodeId>> for Target {
    fn from(node: Option<NodeId>) -> Self {
        node.map_or(Target::None, Target::Element)
    }
}

impl From<Vec<NodeId>> for Target {
    fn from(nodes: Vec<NodeId>) -> Self {
        Target::Elements(nodes)
    }
}

impl From<&[NodeId]> for Target {
    fn from(nodes: &[NodeId]) -> Self {
        Target::Elements(nodes.to_vec())
    }
}

impl From<&Vec<NodeId>> for Target {
    fn from(nodes: &Vec<NodeId>) -> Self {
        Target::Elements(nodes.clone())
    }
}

impl<const N: usize> From<[NodeId; N]> for Target {
    fn from(nodes: [NodeId; N]) -> Self {
        Target::Elements(nodes.to_vec())
    }
}
