//! In-memory element tree implementing `Page`.
//!
//! A deliberately small DOM: elements with a tag, attributes, an ordered
//! class list, and parent/child links. Nodes live in an arena owned by the
//! `Document` and are addressed by `NodeId`; nodes are never removed, so an
//! id handed out by a document stays valid for its lifetime.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use super::Page;
use crate::like::{ICON_CLASSES, LIKE_BUTTON_CLASS};

/// Handle to an element owned by a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
        }
    }
}

/// Arena-backed element tree rooted at a `<body>` element.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![Element::new("body", None)] }
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a `tag` element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag, Some(parent)));
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.nodes.get_mut(node.0) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(node.0) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(node.0) {
            el.classes.retain(|c| c != class);
        }
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes.get(node.0).map(|el| el.classes.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|el| el.tag.as_str())
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|el| el.parent)
    }

    /// Descendants of `node` in document (pre-)order, excluding `node`.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(node.0)
            .map(|el| el.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(el) = self.nodes.get(next.0) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for Document {
    type Node = NodeId;

    fn like_buttons(&self) -> Vec<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .filter(|&id| self.has_class(&id, LIKE_BUTTON_CLASS))
            .collect()
    }

    fn closest_button(&self, target: &NodeId) -> Option<NodeId> {
        let mut cursor = Some(*target);
        while let Some(id) = cursor {
            if self.tag(id)? == "button" {
                return Some(id);
            }
            cursor = self.parent(id);
        }
        None
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.get(node.0)?.attributes.get(name).cloned()
    }

    fn like_icon(&self, button: &NodeId) -> Option<NodeId> {
        self.descendants(*button)
            .into_iter()
            .find(|id| ICON_CLASSES.iter().any(|class| self.has_class(id, class)))
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn set_class(&mut self, node: &NodeId, class: &str, present: bool) {
        if present {
            self.add_class(*node, class);
        } else {
            self.remove_class(*node, class);
        }
    }
}
