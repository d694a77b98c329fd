//! `reqwest`-backed `LikeApi` for native builds.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use async_trait::async_trait;

use super::{LikeApi, like_url};
use crate::config::LikesConfig;
use crate::error::LikeError;

pub struct HttpLikeApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLikeApi {
    /// Build a client for `config.base_url` with the configured timeouts.
    ///
    /// Redirects are not followed: the backend answers an unauthorized like
    /// with a redirect, which must surface as a rejected toggle.
    ///
    /// # Errors
    ///
    /// Returns `LikeError::HttpClientBuild` if the client cannot be built.
    pub fn new(config: &LikesConfig) -> Result<Self, LikeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| LikeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LikeApi for HttpLikeApi {
    async fn toggle_like(&self, id: &str) -> Result<(), LikeError> {
        let url = like_url(&self.base_url, id);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| LikeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LikeError::Status { status: status.as_u16() });
        }
        tracing::debug!(%url, status = status.as_u16(), "like request accepted");
        Ok(())
    }
}
