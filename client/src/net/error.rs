//! Errors returned by REST calls and their mapping to form messages.
//!
//! ERROR HANDLING
//! ==============
//! Only two outcomes reach the user: the server's own `message` when it
//! rejected the request, or a page-specific "try again" string for every
//! other failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`crate::net::api`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response body did not have the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The call was made outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show next to a form.
    ///
    /// `fallback` is used when the server rejected the request without a
    /// message; `network` for every failure that is not a rejection.
    #[must_use]
    pub fn user_message(&self, fallback: &str, network: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => fallback.to_owned(),
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => network.to_owned(),
        }
    }
}
