//! Error type shared by the shell's fallible operations.
//!
//! Bridge commands never surface these to the content side; they convert
//! them into the sentinel values of their channel at the boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ShellError {
    /// The content target could not be reached or read.
    #[error("content at {location} is unavailable: {reason}")]
    ContentUnavailable { location: String, reason: String },

    /// A window the operation needs is no longer open.
    #[error("window '{0}' is not open")]
    WindowMissing(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Forwarding a request to the development endpoint failed.
    #[error("proxy error: {0}")]
    Proxy(#[from] reqwest::Error),
}

impl ShellError {
    pub(crate) fn content_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
