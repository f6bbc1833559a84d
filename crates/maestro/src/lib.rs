//! Maestro — delegation and task-resolution client for remote A2A agents.
//!
//! A coordinating process hands a natural-language task to a named remote
//! agent and gets a string back. Under the hood that is: registry lookup,
//! agent-card discovery, one `message/send` round trip, classification of
//! the reply as inline-or-deferred, and a bounded polling loop for deferred
//! task handles. Blocking call sites get the same pipeline through
//! [`DelegationClient::delegate_blocking`].
//!
//! ```no_run
//! # async fn run() {
//! use maestro::{DelegationClient, EndpointRegistry};
//!
//! let registry = EndpointRegistry::new()
//!     .with_endpoint("notion_agent", "http://localhost:8002")
//!     .with_endpoint("elevenlabs_agent", "http://localhost:8003");
//! let client = DelegationClient::new(registry);
//!
//! let result = client
//!     .delegate("notion_agent", "Find the Q3 planning doc and summarize it")
//!     .await;
//! // Either the agent's answer, or an "Error: ..." string — never a panic
//! // or a structured error at this surface.
//! println!("{result}");
//! # }
//! ```

pub mod artifacts;
mod bridge;
mod client;
pub mod config;
pub mod error;
pub mod poller;
pub mod registry;
pub mod reply;
pub mod request;

pub use artifacts::ExtractedContent;
pub use client::{DelegationClient, DelegationClientBuilder, DelegationOutcome, DEFAULT_BRIDGE_TIMEOUT};
pub use config::DelegateConfig;
pub use error::{DelegateError, Result};
pub use poller::{RetryPolicy, TaskPoller, TaskQuery};
pub use registry::EndpointRegistry;
pub use request::RequestBuilder;
