//! `gloo-net`-backed `LikeApi` for the browser build.

use async_trait::async_trait;

use super::{LikeApi, like_url};
use crate::config::LikesConfig;
use crate::error::LikeError;

pub struct GlooLikeApi {
    base_url: String,
}

impl GlooLikeApi {
    #[must_use]
    pub fn new(config: &LikesConfig) -> Self {
        Self { base_url: config.base_url.trim_end_matches('/').to_string() }
    }
}

#[async_trait(?Send)]
impl LikeApi for GlooLikeApi {
    async fn toggle_like(&self, id: &str) -> Result<(), LikeError> {
        let url = like_url(&self.base_url, id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| LikeError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(LikeError::Status { status: resp.status() });
        }
        Ok(())
    }
}
