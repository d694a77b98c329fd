//! Like state and the per-button view-model.
//!
//! DESIGN
//! ======
//! The icon's class list is a rendering of `LikeState`, never the source of
//! truth after binding. Each bound button owns one `LikeButton` holding the
//! state; a successful toggle flips the state and re-renders both class
//! pairs from it, so the pairs cannot drift apart.

#[cfg(test)]
#[path = "like_test.rs"]
mod like_test;

use serde::{Deserialize, Serialize};

use crate::page::Page;

pub const LIKE_BUTTON_CLASS: &str = "like-button";
pub const LIKE_BUTTON_SELECTOR: &str = ".like-button";
pub const ID_ATTRIBUTE: &str = "data-id";

pub const LIKED_CLASS: &str = "liked-message";
pub const UNLIKED_CLASS: &str = "unliked-message";
pub const SOLID_CLASS: &str = "fas";
pub const OUTLINE_CLASS: &str = "far";

/// Every class that marks an element as the like icon.
pub const ICON_CLASSES: [&str; 4] = [LIKED_CLASS, UNLIKED_CLASS, SOLID_CLASS, OUTLINE_CLASS];

/// CSS selector matching [`ICON_CLASSES`].
pub const ICON_SELECTOR: &str = ".liked-message, .unliked-message, .fas, .far";

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeState {
    Liked,
    Unliked,
}

impl LikeState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Liked => Self::Unliked,
            Self::Unliked => Self::Liked,
        }
    }

    /// `(visual, glyph)` classes the icon carries in this state.
    #[must_use]
    pub fn icon_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Liked => (LIKED_CLASS, SOLID_CLASS),
            Self::Unliked => (UNLIKED_CLASS, OUTLINE_CLASS),
        }
    }

    /// Read the state an icon currently displays.
    ///
    /// The liked/unliked pair wins; the solid/outline glyph is only consulted
    /// when neither visual class is present.
    pub fn from_icon<P: Page>(page: &P, icon: &P::Node) -> Option<Self> {
        if page.has_class(icon, LIKED_CLASS) {
            Some(Self::Liked)
        } else if page.has_class(icon, UNLIKED_CLASS) {
            Some(Self::Unliked)
        } else if page.has_class(icon, SOLID_CLASS) {
            Some(Self::Liked)
        } else if page.has_class(icon, OUTLINE_CLASS) {
            Some(Self::Unliked)
        } else {
            None
        }
    }
}

// =============================================================================
// VIEW-MODEL
// =============================================================================

/// One bound like button: its element, its icon and the displayed state.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeButton<N> {
    pub button: N,
    pub icon: N,
    state: LikeState,
}

impl<N: Clone + PartialEq + std::fmt::Debug> LikeButton<N> {
    /// Bind `button`, reading the initial state from its icon.
    ///
    /// Returns `None` when the button has no recognizable icon.
    pub fn bind<P: Page<Node = N>>(page: &P, button: N) -> Option<Self> {
        let icon = page.like_icon(&button)?;
        let state = LikeState::from_icon(page, &icon)?;
        Some(Self { button, icon, state })
    }

    #[must_use]
    pub fn state(&self) -> LikeState {
        self.state
    }

    /// Flip the state and return the new one. Does not touch the page.
    pub fn toggle(&mut self) -> LikeState {
        self.state = self.state.toggled();
        self.state
    }

    /// Write the current state onto the icon: exactly one class per pair.
    pub fn render<P: Page<Node = N>>(&self, page: &mut P) {
        let (visual, glyph) = self.state.icon_classes();
        for class in ICON_CLASSES {
            page.set_class(&self.icon, class, class == visual || class == glyph);
        }
    }
}
