//! Arena-backed document tree.

use super::dataset::Dataset;
use super::error::DomError;
use super::node::{ElementData, Node, NodeData, NodeId};
use super::style::InlineStyle;
use crate::selector::{SelectorError, SelectorList};

/// An HTML document held in memory.
///
/// Nodes live in an arena owned by the document and are addressed with
/// [`NodeId`] handles. Detached nodes (freshly created, removed, or replaced)
/// stay in the arena and can be reinserted.
///
/// A new document already has the `<html>`, `<head>` and `<body>` skeleton.
///
/// # Example
///
/// ```rust
/// use skeletonize::dom::Document;
///
/// let mut document = Document::new();
/// let body = document.body();
/// let card = document
///     .append_element(body, "div", &[("class", "card"), ("data-skeleton-color", "red")])
///     .unwrap();
///
/// assert_eq!(document.query_selector_all(".card").unwrap(), vec![card]);
/// assert_eq!(document.dataset(card).get("skeletonColor"), Some("red"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    document_element: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Document {
    /// Creates a document containing `<html><head></head><body></body></html>`.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut document = Self {
            nodes: vec![Node::new(NodeData::Document)],
            root,
            document_element: root,
            head: root,
            body: root,
        };

        let html = document.create_element("html");
        let head = document.create_element("head");
        let body = document.create_element("body");
        document.link(root, html, None);
        document.link(html, head, None);
        document.link(html, body, None);

        document.document_element = html;
        document.head = head;
        document.body = body;
        document
    }

    /// The document node itself.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> NodeId {
        self.document_element
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ----- creation -----

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(tag)))
    }

    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// Creates an element with the given attributes and appends it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let element = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(element, name, value)?;
        }
        self.append_child(parent, element)?;
        Ok(element)
    }

    /// Creates a text node and appends it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        let node = self.create_text_node(text);
        self.append_child(parent, node)?;
        Ok(node)
    }

    /// Copies a node. With `deep`, the whole subtree is copied.
    ///
    /// The copy is detached; attributes (including inline style) are copied
    /// as they are at call time.
    pub fn clone_node(&mut self, node: NodeId, deep: bool) -> Result<NodeId, DomError> {
        let data = self.node(node).ok_or(DomError::UnknownNode(node))?.data.clone();
        let copy = self.push(data);
        if !deep {
            return Ok(copy);
        }

        let mut pending = vec![(node, copy)];
        while let Some((original, original_copy)) = pending.pop() {
            for child in self.children(original).to_vec() {
                let data = self.nodes[child.0].data.clone();
                let child_copy = self.push(data);
                self.link(original_copy, child_copy, None);
                pending.push((child, child_copy));
            }
        }
        Ok(copy)
    }

    // ----- inspection -----

    /// Whether `node` indexes a node of this document.
    pub fn has_node(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    /// The node's payload, or `None` for a handle from another document.
    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.node(node).map(|node| &node.data)
    }

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.data(node)? {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(ElementData::tag_name)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    /// The parent, if it is an element (the `<html>` element has none).
    pub fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node).filter(|&parent| self.is_element(parent))
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.node(node) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
            .collect()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        siblings.get(index + 1).copied()
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        index.checked_sub(1).map(|previous| siblings[previous])
    }

    pub fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.previous_sibling(node);
        while let Some(sibling) = current {
            if self.is_element(sibling) {
                return Some(sibling);
            }
            current = self.previous_sibling(sibling);
        }
        None
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    /// Whether the node is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// All descendants of `node` in document (pre-)order, excluding `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            found.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        found
    }

    pub fn text_content(&self, node: NodeId) -> String {
        if let Some(NodeData::Text(text)) = self.data(node) {
            return text.clone();
        }
        self.descendants(node)
            .into_iter()
            .filter_map(|descendant| match self.data(descendant) {
                Some(NodeData::Text(text)) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    // ----- lookup -----

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&node| self.element(node).and_then(ElementData::id) == Some(id))
    }

    /// Descendant elements of `scope` with the given tag name, in document order.
    pub fn get_elements_by_tag_name(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| {
                self.tag_name(node)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    /// Every connected element matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.query_selector_all_within(self.root, selector)
    }

    /// Descendant elements of `scope` matching `selector`, in document order.
    ///
    /// Combinators may match ancestors outside `scope`, as in the DOM.
    pub fn query_selector_all_within(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let selectors = SelectorList::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|&node| selectors.matches(self, node))
            .collect())
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    // ----- attributes -----

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?.set_attribute(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_mut(node)?.remove_attribute(name))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|element| element.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(node)?.add_class(class);
        Ok(())
    }

    /// Parsed view of the element's `style` attribute.
    pub fn style(&self, node: NodeId) -> InlineStyle {
        InlineStyle::parse(self.get_attribute(node, "style").unwrap_or(""))
    }

    /// Sets one inline style property, like `element.style.setProperty`.
    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let mut style = self.style(node);
        style.set_property(name, value);
        self.set_attribute(node, "style", &style.to_css_text())
    }

    /// The element's `data-*` attributes, like `element.dataset`.
    ///
    /// Non-elements have an empty dataset.
    pub fn dataset(&self, node: NodeId) -> Dataset {
        match self.element(node) {
            Some(element) => Dataset::from_attributes(element.attributes()),
            None => Dataset::default(),
        }
    }

    // ----- mutation -----

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Inserts `child` into `parent` before `reference` (or last when `None`).
    ///
    /// A child that already has a parent is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.check_insertion(parent, child)?;
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild {
                    parent,
                    child: reference,
                });
            }
        }

        let reference = if reference == Some(child) {
            self.next_sibling(child)
        } else {
            reference
        };

        self.unlink(child);
        self.link(parent, child, reference);
        Ok(())
    }

    /// Replaces `old` (a child of `parent`) with `new`, keeping its position.
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> Result<(), DomError> {
        if self.parent(old) != Some(parent) {
            return Err(DomError::NotAChild { parent, child: old });
        }
        if new == old {
            return Ok(());
        }
        self.check_insertion(parent, new)?;

        self.unlink(new);
        if let Some(index) = self.position_in_parent(parent, old) {
            self.nodes[parent.0].children[index] = new;
            self.nodes[new.0].parent = Some(parent);
            self.nodes[old.0].parent = None;
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.unlink(child);
        Ok(())
    }

    /// Removes the node from its parent, if any.
    pub fn detach(&mut self, node: NodeId) {
        self.unlink(node);
    }

    /// Puts `new` where `old` is, like `old.replaceWith(new)`.
    ///
    /// Does nothing when `old` has no parent.
    pub fn replace_with(&mut self, old: NodeId, new: NodeId) -> Result<(), DomError> {
        match self.parent(old) {
            Some(parent) => self.replace_child(parent, new, old),
            None => Ok(()),
        }
    }

    /// Inserts `new` right after `reference`, like `reference.after(new)`.
    ///
    /// Does nothing when `reference` has no parent.
    pub fn insert_after(&mut self, reference: NodeId, new: NodeId) -> Result<(), DomError> {
        match self.parent(reference) {
            Some(parent) => {
                let next = self.next_sibling(reference);
                self.insert_before(parent, new, next)
            }
            None => Ok(()),
        }
    }

    // ----- internals -----

    fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, DomError> {
        match self.nodes.get_mut(node.0).map(|entry| &mut entry.data) {
            Some(NodeData::Element(element)) => Ok(element),
            Some(_) => Err(DomError::NotAnElement(node)),
            None => Err(DomError::UnknownNode(node)),
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_data = self.data(parent).ok_or(DomError::UnknownNode(parent))?;
        let child_data = self.data(child).ok_or(DomError::UnknownNode(child))?;
        let parent_accepts_children = matches!(parent_data, NodeData::Document | NodeData::Element(_));
        let child_is_document = matches!(child_data, NodeData::Document);
        if !parent_accepts_children || child_is_document || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    fn position_in_parent(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&existing| existing == child)
    }

    fn unlink(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(node.0).and_then(|entry| entry.parent.take());
        if let Some(parent) = parent {
            self.nodes[parent.0].children.retain(|&child| child != node);
        }
    }

    // Callers guarantee `child` is detached.
    fn link(&mut self, parent: NodeId, child: NodeId, before: Option<NodeId>) {
        let index = before
            .and_then(|reference| self.position_in_parent(parent, reference))
            .unwrap_or(self.nodes[parent.0].children.len());
        self.nodes[parent.0].children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
