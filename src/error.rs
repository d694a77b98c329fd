//! Errors produced while toggling a like.
//!
//! DESIGN
//! ======
//! A failed toggle is reported to the caller as a `LikeError` and never
//! touches the icon. Request failures carry enough detail to log; the
//! remaining variants describe clicks or configuration that never reached
//! the network.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured logs.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("like request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("like request rejected: status {status}")]
    Status { status: u16 },

    /// The click target has no bound like button around it.
    #[error("click target is not inside a like button")]
    NotLikeButton,

    /// The like button carries no `data-id` attribute.
    #[error("like button has no data-id attribute")]
    MissingId,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl ErrorCode for LikeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_REQUEST",
            Self::Status { .. } => "E_STATUS",
            Self::NotLikeButton => "E_NOT_LIKE_BUTTON",
            Self::MissingId => "E_MISSING_ID",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599 })
    }
}
