//! Response types for the methods the client speaks.

use serde::{Deserialize, Serialize};

use super::core::{Message, Task};

/// Reply to `message/send`: either a task record (work deferred to polling)
/// or a direct message carrying the result inline.
///
/// The two shapes are disjoint on the wire — tasks have `id`/`status`,
/// messages have `messageId`/`role`/`parts` — so an untagged union resolves
/// unambiguously, and downstream code pattern-matches instead of probing
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SendMessageReply {
    Task(Task),
    Message(Message),
}
