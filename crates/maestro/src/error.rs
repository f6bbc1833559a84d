//! Delegation error taxonomy.
//!
//! Every kind here is recovered at the delegation boundary: the string
//! surface ([`DelegationClient::delegate`](crate::DelegationClient::delegate))
//! renders them as `"Error: ..."` strings instead of propagating.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelegateError {
    /// The requested logical name is not registered. Raised before any
    /// network I/O; carries the full set of valid names.
    #[error("Agent '{name}' is not a known agent. Available agents are: {known:?}")]
    UnknownAgent { name: String, known: Vec<String> },

    /// Transport-level connection failure to the resolved endpoint.
    #[error("agent unreachable: {0}")]
    Unreachable(String),

    /// The endpoint answered, but the reply was structurally unusable.
    #[error("malformed reply: {0}")]
    Malformed(String),

    /// Terminal success, but the artifacts held no text and no audio.
    #[error("No content received")]
    NoContent,

    /// The remote explicitly reported a failed or canceled task; the
    /// message is passed through verbatim.
    #[error("{message}")]
    RemoteFailure { message: String },

    /// Polling budget exhausted while the task stayed non-terminal.
    #[error("Task did not complete within {attempts} polling attempts")]
    Timeout { attempts: u32 },

    /// The blocking bridge's worker never returned within the outer bound.
    /// Distinct from [`DelegateError::Timeout`], which is the inner polling
    /// budget.
    #[error("Blocking delegation did not return within {0:?}")]
    BridgeTimeout(Duration),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DelegateError>;

impl From<a2a::A2AError> for DelegateError {
    fn from(err: a2a::A2AError) -> Self {
        match err {
            a2a::A2AError::Transport(e) => Self::Unreachable(e.to_string()),
            a2a::A2AError::Malformed(m) => Self::Malformed(m),
            // An explicit JSON-RPC error object is the remote reporting a
            // failure, not a broken reply.
            a2a::A2AError::Rpc { code, message } => Self::RemoteFailure {
                message: format!("{message} (code {code})"),
            },
        }
    }
}
