//! # likes
//!
//! Message like toggling for the warbler web UI. A click on a like icon
//! sends `POST {base}/messages/{id}/like` and, once the backend accepts it,
//! flips the icon between liked/solid and unliked/outline.
//!
//! The handler runs against any [`page::Page`]: the live DOM in the browser
//! build (feature `web`, entry point `web::start`) or the in-memory
//! [`page::Document`]. The `likes` binary (feature `cli`) issues the same
//! request from a terminal.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod like;
pub mod page;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(test)]
mod test_log;

pub use api::{LikeApi, like_url};
pub use config::{Environment, LikesConfig};
pub use error::{ErrorCode, LikeError};
pub use handler::LikeToggleHandler;
pub use like::{LikeButton, LikeState};
