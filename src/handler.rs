//! Like toggle handler: click → request → re-render.
//!
//! DESIGN
//! ======
//! `initialize` snapshots the like buttons present in the page and binds a
//! `LikeButton` view-model to each. Buttons added to the page afterwards are
//! never bound.
//!
//! `handle_click` resolves the clicked button and its `data-id`, suspends on
//! the backend call, and only then flips the view-model and re-renders the
//! icon. The page lock is released across the await, so overlapping clicks
//! each run their own request and apply in the order their responses land.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as `LikeError` and leaves the icon as it was.
//! Every failure is also logged with its code, since browser callers fire
//! and forget.

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::LikeApi;
use crate::error::{ErrorCode, LikeError};
use crate::like::{ID_ATTRIBUTE, LikeButton, LikeState};
use crate::page::Page;

#[cfg(not(target_arch = "wasm32"))]
use crate::{api::http::HttpLikeApi, config::LikesConfig};

/// Page plus the view-models bound to it, guarded together.
struct Bound<P: Page> {
    page: P,
    buttons: Vec<LikeButton<P::Node>>,
}

pub struct LikeToggleHandler<P: Page, A> {
    api: Arc<A>,
    bound: Arc<RwLock<Bound<P>>>,
    nodes: Arc<Vec<P::Node>>,
}

impl<P: Page, A> Clone for LikeToggleHandler<P, A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), bound: Arc::clone(&self.bound), nodes: Arc::clone(&self.nodes) }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<P: Page> LikeToggleHandler<P, HttpLikeApi> {
    /// Initialize against the backend named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &LikesConfig, page: P) -> Result<Self, LikeError> {
        Ok(Self::initialize(HttpLikeApi::new(config)?, page))
    }
}

impl<P: Page, A: LikeApi> LikeToggleHandler<P, A> {
    /// Bind every like button currently in `page`.
    pub fn initialize(api: A, page: P) -> Self {
        let mut buttons = Vec::new();
        for node in page.like_buttons() {
            match LikeButton::bind(&page, node.clone()) {
                Some(button) => buttons.push(button),
                None => tracing::warn!(button = ?node, "like button has no recognizable icon; not bound"),
            }
        }
        tracing::debug!(count = buttons.len(), "like buttons bound");

        let nodes = buttons.iter().map(|b| b.button.clone()).collect();
        Self { api: Arc::new(api), bound: Arc::new(RwLock::new(Bound { page, buttons })), nodes: Arc::new(nodes) }
    }

    /// Buttons bound at initialization, in document order.
    #[must_use]
    pub fn bound_buttons(&self) -> &[P::Node] {
        &self.nodes
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Current state of a bound button.
    #[cfg(test)]
    pub(crate) async fn state_of(&self, button: &P::Node) -> Option<LikeState> {
        let bound = self.bound.read().await;
        bound.buttons.iter().find(|b| b.button == *button).map(LikeButton::state)
    }

    /// Run `f` against the page.
    #[cfg(test)]
    pub(crate) async fn read_page<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.bound.read().await.page)
    }

    /// Run `f` against the page mutably. Does not bind new buttons.
    #[cfg(test)]
    pub(crate) async fn update_page<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut self.bound.write().await.page)
    }

    /// Handle a click on `target`; returns the state now displayed.
    ///
    /// # Errors
    ///
    /// - `LikeError::NotLikeButton` if `target` is not inside a bound button
    /// - `LikeError::MissingId` if the button has no `data-id`
    /// - request errors from [`Self::toggle_like`]
    ///
    /// The icon is unchanged whenever an error is returned.
    pub async fn handle_click(&self, target: &P::Node) -> Result<LikeState, LikeError> {
        let (button, id) = self.resolve_click(target).await.inspect_err(|e| {
            tracing::warn!(
                target_node = ?target,
                code = e.error_code(),
                retryable = e.retryable(),
                error = %e,
                "like click ignored"
            );
        })?;
        tracing::debug!(message_id = %id, "like clicked");

        self.toggle_like(&id).await?;

        let mut bound = self.bound.write().await;
        let Bound { page, buttons } = &mut *bound;
        let view = buttons
            .iter_mut()
            .find(|b| b.button == button)
            .ok_or(LikeError::NotLikeButton)?;
        let state = view.toggle();
        view.render(page);
        tracing::info!(message_id = %id, ?state, "like toggled");
        Ok(state)
    }

    /// Bound button around `target` and its message id.
    async fn resolve_click(&self, target: &P::Node) -> Result<(P::Node, String), LikeError> {
        let bound = self.bound.read().await;
        let button = bound
            .page
            .closest_button(target)
            .filter(|b| self.nodes.contains(b))
            .ok_or(LikeError::NotLikeButton)?;
        let id = bound.page.attribute(&button, ID_ATTRIBUTE).ok_or(LikeError::MissingId)?;
        Ok((button, id))
    }

    /// Send one toggle request for `id`.
    ///
    /// # Errors
    ///
    /// Propagates the request error after logging it.
    pub async fn toggle_like(&self, id: &str) -> Result<(), LikeError> {
        self.api.toggle_like(id).await.inspect_err(|e| {
            tracing::warn!(
                message_id = %id,
                code = e.error_code(),
                retryable = e.retryable(),
                error = %e,
                "like request failed"
            );
        })
    }
}
