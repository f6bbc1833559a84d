//! A2A (Agent-to-Agent) protocol support.
//!
//! Wire types for the task/message data model plus a JSON-RPC HTTP client
//! for talking to remote A2A agents: agent-card discovery, `message/send`,
//! and `tasks/get`.

pub mod client;
pub mod error;
pub mod jsonrpc;
pub mod types;

pub use client::A2AClient;
pub use error::A2AError;
pub use types::*;
