//! Transport-layer error taxonomy for the A2A client.

use thiserror::Error;

/// Errors produced by the A2A HTTP client.
///
/// The split matters downstream: a `Transport` failure means the endpoint was
/// never reached (or the connection broke mid-flight), while `Malformed` means
/// the endpoint answered but the body was structurally unusable. `Rpc` carries
/// an error the remote agent reported explicitly.
#[derive(Debug, Error)]
pub enum A2AError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("agent returned error {code}: {message}")]
    Rpc { code: i32, message: String },
}

impl A2AError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// True when the failure happened at the connection level, before any
    /// usable HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
