//! Classification of `message/send` replies.

use a2a::types::responses::SendMessageReply;

use crate::error::DelegateError;

/// What a reply resolved to: an inline result or a task handle to poll.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Immediate {
        text: String,
        context_id: Option<String>,
    },
    Deferred {
        task_id: String,
        context_id: Option<String>,
    },
}

/// Classify a reply. Inline text always wins: some endpoints echo a task id
/// alongside the final content, and the content is authoritative. Empty text
/// fragments do not count as content. A message with a task id and no text
/// defers to polling; a bare task record always defers. A reply with neither
/// is unusable.
pub fn classify(reply: SendMessageReply) -> Result<Classified, DelegateError> {
    match reply {
        SendMessageReply::Message(msg) => {
            let texts: Vec<&str> = msg
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .filter(|text| !text.is_empty())
                .collect();
            if !texts.is_empty() {
                return Ok(Classified::Immediate {
                    text: texts.join("\n"),
                    context_id: msg.context_id,
                });
            }
            if let Some(task_id) = msg.task_id {
                return Ok(Classified::Deferred {
                    task_id,
                    context_id: msg.context_id,
                });
            }
            Err(DelegateError::Malformed(
                "reply carried neither inline content nor a task handle".to_string(),
            ))
        }
        SendMessageReply::Task(task) => Ok(Classified::Deferred {
            task_id: task.id,
            context_id: task.context_id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a2a::types::core::{Message, Part, Task, TaskState};

    fn message_reply(parts: Vec<Part>) -> SendMessageReply {
        SendMessageReply::Message(Message::agent(parts))
    }

    #[test]
    fn text_parts_join_with_newlines() {
        let reply = message_reply(vec![Part::text("A"), Part::text("B")]);
        assert_eq!(
            classify(reply).unwrap(),
            Classified::Immediate {
                text: "A\nB".to_string(),
                context_id: None
            }
        );
    }

    #[test]
    fn inline_text_wins_over_a_coexisting_task_id() {
        let mut msg = Message::agent(vec![Part::text("already done")]);
        msg.task_id = Some("task-1".to_string());
        match classify(SendMessageReply::Message(msg)).unwrap() {
            Classified::Immediate { text, .. } => assert_eq!(text, "already done"),
            other => panic!("expected immediate, got: {other:?}"),
        }
    }

    #[test]
    fn message_without_text_defers_on_its_task_id() {
        let mut msg = Message::agent(vec![]);
        msg.task_id = Some("task-2".to_string());
        msg.context_id = Some("ctx-2".to_string());
        assert_eq!(
            classify(SendMessageReply::Message(msg)).unwrap(),
            Classified::Deferred {
                task_id: "task-2".to_string(),
                context_id: Some("ctx-2".to_string())
            }
        );
    }

    #[test]
    fn task_reply_defers_on_the_task_id() {
        let task = Task::new("task-3", TaskState::Submitted);
        match classify(SendMessageReply::Task(task)).unwrap() {
            Classified::Deferred { task_id, .. } => assert_eq!(task_id, "task-3"),
            other => panic!("expected deferred, got: {other:?}"),
        }
    }

    #[test]
    fn empty_text_parts_do_not_count_as_inline_content() {
        let mut msg = Message::agent(vec![Part::text("")]);
        msg.task_id = Some("task-5".to_string());
        assert!(matches!(
            classify(SendMessageReply::Message(msg)).unwrap(),
            Classified::Deferred { .. }
        ));

        // Without a task handle either, an empty-text reply is unusable.
        let empty_only = message_reply(vec![Part::text("")]);
        assert!(matches!(
            classify(empty_only),
            Err(DelegateError::Malformed(_))
        ));
    }

    #[test]
    fn non_text_parts_do_not_count_as_inline_content() {
        let mut msg = Message::agent(vec![Part::audio("https://example.com/a.mp3")]);
        msg.task_id = Some("task-4".to_string());
        assert!(matches!(
            classify(SendMessageReply::Message(msg)).unwrap(),
            Classified::Deferred { .. }
        ));
    }

    #[test]
    fn empty_message_without_handle_is_malformed() {
        let reply = message_reply(vec![]);
        assert!(matches!(
            classify(reply),
            Err(DelegateError::Malformed(_))
        ));
    }
}
