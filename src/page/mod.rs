//! The hosting page, as seen by the like handler.
//!
//! DESIGN
//! ======
//! The handler only needs a handful of DOM queries: find the like buttons,
//! walk up from a click target to its button, read an attribute, find the
//! icon inside a button, and flip classes. `Page` names exactly those so the
//! same handler drives the real browser DOM (`browser`, wasm only) and the
//! in-memory `Document` used by tests and tools.

pub mod memory;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod browser;

pub use memory::{Document, NodeId};

/// Minimal DOM surface used by the like handler.
pub trait Page {
    /// Handle to an element in this page.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// Every element carrying the like-button class, in document order.
    fn like_buttons(&self) -> Vec<Self::Node>;

    /// Nearest ancestor-or-self `button` element of `target`.
    fn closest_button(&self, target: &Self::Node) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// First descendant of `button` carrying any recognized icon class.
    fn like_icon(&self, button: &Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add (`present == true`) or remove a single class.
    fn set_class(&mut self, node: &Self::Node, class: &str, present: bool);
}
