//! `Page` over the live browser DOM. Requires a browser environment.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::Page;
use crate::like::{ICON_SELECTOR, LIKE_BUTTON_SELECTOR};

pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for BrowserPage {
    type Node = Element;

    fn like_buttons(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(LIKE_BUTTON_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn closest_button(&self, target: &Element) -> Option<Element> {
        target.closest("button").ok().flatten()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn like_icon(&self, button: &Element) -> Option<Element> {
        button.query_selector(ICON_SELECTOR).ok().flatten()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&mut self, node: &Element, class: &str, present: bool) {
        if let Err(err) = node.class_list().toggle_with_force(class, present) {
            tracing::debug!(?err, class, present, "icon class update failed");
        }
    }
}
