//! Backend call that toggles a like.
//!
//! DESIGN
//! ======
//! `LikeApi` is the seam between the handler and the network. Native builds
//! use `reqwest` (`http`); the browser build uses `gloo-net` (`gloo`). Both
//! send `POST {base}/messages/{id}/like` with no body and report only
//! success or failure.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status is an error just like a transport failure, so the
//! caller never renders a toggle the backend did not accept.

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod gloo;

use async_trait::async_trait;

use crate::error::LikeError;

/// Toggle the like on one message.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LikeApi {
    /// Issue exactly one toggle request for `id`.
    ///
    /// # Errors
    ///
    /// `LikeError::Request` on transport failure, `LikeError::Status` on a
    /// non-success response.
    async fn toggle_like(&self, id: &str) -> Result<(), LikeError>;
}

/// Endpoint for toggling `id`. The identifier is substituted verbatim.
#[must_use]
pub fn like_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/messages/{id}/like")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_url_joins_base_and_id() {
        assert_eq!(like_url("http://127.0.0.1:5000", "7"), "http://127.0.0.1:5000/messages/7/like");
    }

    #[test]
    fn like_url_does_not_escape_id() {
        assert_eq!(like_url("https://h", "a b"), "https://h/messages/a b/like");
    }
}
