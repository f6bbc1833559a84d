//! Delegation request construction.

use a2a::types::core::{Message, Part};
use a2a::types::requests::SendMessageRequest;

/// Builds `message/send` payloads for delegation requests.
///
/// Every build generates a fresh message id (the correlation id for
/// request/response matching). Task and context ids thread conversation
/// continuity and are present on the wire only when set — absent fields
/// are omitted, never null.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    task_id: Option<String>,
    context_id: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_id(mut self, id: impl Into<String>) -> Self {
        self.task_id = Some(id.into());
        self
    }

    pub fn context_id(mut self, id: impl Into<String>) -> Self {
        self.context_id = Some(id.into());
        self
    }

    pub fn build(&self, task_description: &str) -> SendMessageRequest {
        let mut message = Message::user(vec![Part::text(task_description)]);
        message.task_id = self.task_id.clone();
        message.context_id = self.context_id.clone();
        SendMessageRequest { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_user_message_with_single_text_part() {
        let request = RequestBuilder::new().build("index the design docs");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["message"]["role"], "user");
        assert_eq!(json["message"]["parts"][0]["text"], "index the design docs");
        assert!(json["message"]["messageId"].is_string());
        assert!(json["message"].get("taskId").is_none());
        assert!(json["message"].get("contextId").is_none());
    }

    #[test]
    fn continuity_ids_appear_only_when_set() {
        let request = RequestBuilder::new()
            .task_id("task-1")
            .context_id("ctx-1")
            .build("follow up");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["message"]["taskId"], "task-1");
        assert_eq!(json["message"]["contextId"], "ctx-1");
    }

    #[test]
    fn each_build_generates_a_fresh_correlation_id() {
        let builder = RequestBuilder::new();
        let first = builder.build("one").message.message_id;
        let second = builder.build("two").message.message_id;
        assert_ne!(first, second);
    }
}
