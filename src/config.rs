//! Client configuration: which backend the like requests go to.
//!
//! The base URL is the only thing that differs between environments, so it
//! is injected here instead of being baked into the handler.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LikeError;

pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEPLOYED_BASE_URL: &str = "https://warbler.example.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Deployed,
}

impl Environment {
    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Local => LOCAL_BASE_URL,
            Self::Deployed => DEPLOYED_BASE_URL,
        }
    }

    /// Parse an environment name coming from page markup.
    ///
    /// Unknown names are logged and yield `None`, leaving the caller on its
    /// default backend.
    #[must_use]
    pub fn parse_or_warn(raw: &str) -> Option<Self> {
        raw.parse::<Self>()
            .inspect_err(|e| tracing::warn!(value = raw, error = %e, "ignoring unknown likes environment"))
            .ok()
    }
}

impl FromStr for Environment {
    type Err = LikeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "local" => Ok(Self::Local),
            "deployed" => Ok(Self::Deployed),
            other => Err(LikeError::ConfigParse(format!(
                "unknown environment '{other}' (expected 'local' or 'deployed')"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Deployed => f.write_str("deployed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikesConfig {
    pub environment: Environment,
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl LikesConfig {
    /// Config pointing at the environment's default backend.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self { environment, base_url: environment.default_base_url().to_string(), timeouts: Timeouts::default() }
    }

    /// Replace the base URL. A trailing `/` is dropped so paths join cleanly.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Switch environment. A base URL that was overridden away from the old
    /// environment's default is kept; otherwise the new default applies.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        if self.base_url == self.environment.default_base_url() {
            self.base_url = environment.default_base_url().to_string();
        }
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `LIKES_ENV`: `local` (default) or `deployed`
    /// - `LIKES_BASE_URL`: overrides the environment's base URL
    /// - `LIKES_REQUEST_TIMEOUT_SECS`: default 30
    /// - `LIKES_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns `LikeError::ConfigParse` for an unknown `LIKES_ENV`.
    pub fn from_env() -> Result<Self, LikeError> {
        let environment = match std::env::var("LIKES_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => Environment::default(),
        };
        let mut config = Self::for_environment(environment);
        if let Ok(base_url) = std::env::var("LIKES_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        config.timeouts = Timeouts {
            request_secs: env_parse_u64("LIKES_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LIKES_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(config)
    }
}

impl Default for LikesConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Local)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
