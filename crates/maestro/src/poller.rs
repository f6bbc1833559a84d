//! Bounded-retry polling of deferred task handles.

use std::time::Duration;

use a2a::types::core::{Task, TaskState};
use a2a::types::requests::GetTaskRequest;
use a2a::{A2AClient, A2AError};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::artifacts::{extract, ExtractedContent};
use crate::error::DelegateError;

/// How long and how often to poll a task handle.
///
/// Total worst-case wait is `(max_attempts - 1) * retry_delay`: the poller
/// queries once per attempt and sleeps only between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
        }
    }

    /// Looser profile for interactive callers that front long orchestration
    /// chains: more attempts, longer spacing.
    pub fn interactive() -> Self {
        Self {
            max_attempts: 15,
            retry_delay: Duration::from_secs(3),
        }
    }
}

/// Source of task records for the poller. Implemented by the HTTP client;
/// test doubles script status sequences without a network.
#[async_trait]
pub trait TaskQuery {
    async fn query_task(&self, task_id: &str) -> Result<Task, A2AError>;
}

#[async_trait]
impl TaskQuery for A2AClient {
    async fn query_task(&self, task_id: &str) -> Result<Task, A2AError> {
        self.get_task(GetTaskRequest {
            id: task_id.to_string(),
        })
        .await
    }
}

/// Drives a task handle to a terminal state within a bounded retry budget.
///
/// Each attempt is independent: nothing is cached between queries beyond the
/// loop position, so polling an already-terminal task is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskPoller {
    policy: RetryPolicy,
}

impl TaskPoller {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Poll until terminal or out of budget.
    ///
    /// - `completed` → extract artifacts (exactly once) and return them.
    /// - `failed` → the attached status message, verbatim, as the error.
    /// - `canceled` → a cancellation-specific failure.
    /// - non-terminal → sleep and retry; when the budget is spent, a timeout.
    /// - query transport errors are transient until the final attempt, which
    ///   surfaces them.
    #[instrument(skip(self, client), fields(task_id = %task_id))]
    pub async fn poll<Q: TaskQuery + Sync>(
        &self,
        client: &Q,
        task_id: &str,
    ) -> Result<ExtractedContent, DelegateError> {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match client.query_task(task_id).await {
                Ok(task) => match task.status.state {
                    TaskState::Completed => {
                        debug!(attempt, "task completed");
                        return extract(&task.artifacts);
                    }
                    TaskState::Failed => {
                        let message = task
                            .status
                            .message
                            .unwrap_or_else(|| "Task failed".to_string());
                        return Err(DelegateError::RemoteFailure { message });
                    }
                    TaskState::Canceled => {
                        return Err(DelegateError::RemoteFailure {
                            message: "Task was canceled by the remote agent".to_string(),
                        });
                    }
                    state => {
                        debug!(attempt, ?state, "task not terminal yet");
                    }
                },
                Err(err) if attempt < max_attempts => {
                    warn!(attempt, error = %err, "task query failed; will retry");
                }
                Err(err) => return Err(err.into()),
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.retry_delay).await;
            }
        }

        Err(DelegateError::Timeout {
            attempts: max_attempts,
        })
    }
}
