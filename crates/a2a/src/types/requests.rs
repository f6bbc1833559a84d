//! Request parameter types for the methods the client speaks.

use serde::{Deserialize, Serialize};

use super::core::Message;

/// Params for `message/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: Message,
}

/// Params for `tasks/get`, referencing a previously returned task handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskRequest {
    pub id: String,
}
