//! Matching parsed selectors against a [`Document`].

use super::parse::{AttributeOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector};
use crate::dom::{Document, ElementData, NodeId};

impl ComplexSelector {
    /// Whether `node` is an element matched by this selector.
    pub fn matches(&self, document: &Document, node: NodeId) -> bool {
        match self.compounds.len() {
            0 => false,
            len => self.matches_from(document, len - 1, node),
        }
    }

    // Right-to-left with backtracking over ancestors and siblings.
    fn matches_from(&self, document: &Document, index: usize, node: NodeId) -> bool {
        let Some(element) = document.element(node) else {
            return false;
        };
        if !self.compounds[index].matches(element) {
            return false;
        }
        if index == 0 {
            return true;
        }

        let next = index - 1;
        match self.combinators[next] {
            Combinator::Child => document
                .parent_element(node)
                .is_some_and(|parent| self.matches_from(document, next, parent)),
            Combinator::Descendant => {
                let mut ancestor = document.parent_element(node);
                while let Some(candidate) = ancestor {
                    if self.matches_from(document, next, candidate) {
                        return true;
                    }
                    ancestor = document.parent_element(candidate);
                }
                false
            }
            Combinator::NextSibling => document
                .previous_element_sibling(node)
                .is_some_and(|sibling| self.matches_from(document, next, sibling)),
            Combinator::SubsequentSibling => {
                let mut sibling = document.previous_element_sibling(node);
                while let Some(candidate) = sibling {
                    if self.matches_from(document, next, candidate) {
                        return true;
                    }
                    sibling = document.previous_element_sibling(candidate);
                }
                false
            }
        }
    }
}

impl CompoundSelector {
    pub fn matches(&self, element: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag_name() != tag.as_str() {
                return false;
            }
        }
        self.ids.iter().all(|id| element.id() == Some(id.as_str()))
            && self.classes.iter().all(|class| element.has_class(class))
            && self
                .attributes
                .iter()
                .all(|attribute| attribute.matches(element))
    }
}

impl AttributeSelector {
    pub fn matches(&self, element: &ElementData) -> bool {
        let Some(actual) = element.attribute(&self.name) else {
            return false;
        };
        let Some((operator, expected)) = &self.matcher else {
            return true;
        };
        let expected = expected.as_str();

        match operator {
            AttributeOperator::Equals => actual == expected,
            AttributeOperator::Includes => {
                !expected.is_empty()
                    && !expected.contains(char::is_whitespace)
                    && actual.split_ascii_whitespace().any(|token| token == expected)
            }
            AttributeOperator::DashMatch => {
                actual == expected
                    || actual
                        .strip_prefix(expected)
                        .is_some_and(|rest| rest.starts_with('-'))
            }
            AttributeOperator::Prefix => !expected.is_empty() && actual.starts_with(expected),
            AttributeOperator::Suffix => !expected.is_empty() && actual.ends_with(expected),
            AttributeOperator::Substring => !expected.is_empty() && actual.contains(expected),
        }
    }
}
