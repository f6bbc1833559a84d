//! The delegation pipeline: resolve → invoke → classify → poll → extract.

use std::time::Duration;

use a2a::{A2AClient, A2AError};
use tracing::{debug, info, instrument, warn};

use crate::config::DelegateConfig;
use crate::error::DelegateError;
use crate::poller::{RetryPolicy, TaskPoller};
use crate::registry::EndpointRegistry;
use crate::reply::{classify, Classified};
use crate::request::RequestBuilder;

/// Outer bound for blocking callers; must exceed the inner polling budget
/// plus network overhead.
pub const DEFAULT_BRIDGE_TIMEOUT: Duration = Duration::from_secs(90);

/// Result of a successful delegation.
#[derive(Debug, Clone, PartialEq)]
pub struct DelegationOutcome {
    /// Extracted result text; empty when the agent produced audio only.
    pub text: String,
    /// First audio reference found in the artifacts, if any.
    pub audio_url: Option<String>,
    /// Context id from the reply; feed it back through
    /// [`DelegationClient::try_delegate_with_context`] to thread follow-up
    /// delegations into the same conversation.
    pub context_id: Option<String>,
}

impl DelegationOutcome {
    /// Plain-text rendering for callers that consume a single string.
    pub fn into_text(self) -> String {
        if self.text.is_empty() {
            if let Some(url) = self.audio_url {
                return format!("Audio URL: {url}");
            }
        }
        self.text
    }
}

/// Client for delegating natural-language tasks to named remote agents.
///
/// Holds one `reqwest::Client` shared across all delegations (clones share
/// the connection pool); each delegation otherwise owns its own state, so
/// concurrent delegations need no coordination.
#[derive(Debug, Clone)]
pub struct DelegationClient {
    registry: EndpointRegistry,
    http: reqwest::Client,
    retry_policy: RetryPolicy,
    bridge_timeout: Duration,
}

#[derive(Debug, Default)]
pub struct DelegationClientBuilder {
    registry: EndpointRegistry,
    retry_policy: Option<RetryPolicy>,
    bridge_timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl DelegationClientBuilder {
    pub fn registry(mut self, registry: EndpointRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn bridge_timeout(mut self, timeout: Duration) -> Self {
        self.bridge_timeout = Some(timeout);
        self
    }

    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> DelegationClient {
        DelegationClient {
            registry: self.registry,
            http: self.http.unwrap_or_default(),
            retry_policy: self.retry_policy.unwrap_or_default(),
            bridge_timeout: self.bridge_timeout.unwrap_or(DEFAULT_BRIDGE_TIMEOUT),
        }
    }
}

impl DelegationClient {
    pub fn new(registry: EndpointRegistry) -> Self {
        Self::builder().registry(registry).build()
    }

    pub fn builder() -> DelegationClientBuilder {
        DelegationClientBuilder::default()
    }

    pub fn from_config(config: &DelegateConfig) -> Self {
        Self::builder()
            .registry(config.registry())
            .retry_policy(config.poll.policy())
            .bridge_timeout(config.bridge_timeout())
            .build()
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub(crate) fn bridge_timeout(&self) -> Duration {
        self.bridge_timeout
    }

    /// Delegate a task and return a structured outcome.
    ///
    /// The registry lookup fails fast on unknown names, before any network
    /// I/O. The reply is classified once at the transport boundary: inline
    /// content returns immediately, a task handle goes through the bounded
    /// polling loop.
    pub async fn try_delegate(
        &self,
        agent_name: &str,
        task_description: &str,
    ) -> Result<DelegationOutcome, DelegateError> {
        self.try_delegate_with_context(agent_name, task_description, None)
            .await
    }

    /// Delegate a follow-up task into an existing conversation.
    ///
    /// The context id comes from a previous
    /// [`DelegationOutcome::context_id`]; the agent threads the new request
    /// into that conversation. `None` starts a fresh one.
    #[instrument(skip(self, task_description, context_id), fields(agent = %agent_name))]
    pub async fn try_delegate_with_context(
        &self,
        agent_name: &str,
        task_description: &str,
        context_id: Option<&str>,
    ) -> Result<DelegationOutcome, DelegateError> {
        let url = self.registry.resolve(agent_name)?.to_string();
        let client = self.connect(&url).await?;

        let mut builder = RequestBuilder::new();
        if let Some(context_id) = context_id {
            builder = builder.context_id(context_id);
        }
        let request = builder.build(task_description);
        debug!(url = %url, "sending delegation request");

        let reply = client
            .send_message(request)
            .await
            .map_err(|e| map_send_error(e, &url))?;

        match classify(reply)? {
            Classified::Immediate { text, context_id } => {
                info!("delegation answered inline");
                Ok(DelegationOutcome {
                    text,
                    audio_url: None,
                    context_id,
                })
            }
            Classified::Deferred {
                task_id,
                context_id,
            } => {
                debug!(task_id = %task_id, "delegation deferred to task polling");
                let content = TaskPoller::new(self.retry_policy)
                    .poll(&client, &task_id)
                    .await?;
                info!(task_id = %task_id, "delegated task completed");
                Ok(DelegationOutcome {
                    text: content.text,
                    audio_url: content.audio_url,
                    context_id,
                })
            }
        }
    }

    /// Delegate a task, encoding every failure as a returned string.
    ///
    /// The result is either the extracted text or an `"Error: ..."` string
    /// naming the agent and the failure reason. This surface never fails:
    /// natural-language callers react to the string instead of handling
    /// structured errors.
    pub async fn delegate(&self, agent_name: &str, task_description: &str) -> String {
        match self.try_delegate(agent_name, task_description).await {
            Ok(outcome) => outcome.into_text(),
            Err(err @ DelegateError::UnknownAgent { .. }) => format!("Error: {err}"),
            Err(err) => {
                warn!(agent = %agent_name, error = %err, "delegation failed");
                format!("Error: {agent_name}: {err}")
            }
        }
    }

    /// Resolve an `A2AClient` for the endpoint: fetch the well-known agent
    /// card, or fall back to treating the URL as a direct JSON-RPC endpoint
    /// when the descriptor is missing or unreadable. A connection-level
    /// failure here is already `Unreachable` — the send would fail the same
    /// way.
    async fn connect(&self, url: &str) -> Result<A2AClient, DelegateError> {
        let mut client = A2AClient::new(url).with_http_client(self.http.clone());
        match client.fetch_agent_card().await {
            Ok(card) => debug!(card = %card.name, "resolved agent card"),
            Err(err) if err.is_transport() => {
                return Err(DelegateError::Unreachable(format!(
                    "could not connect to agent at {url}: {err}"
                )));
            }
            Err(err) => {
                debug!(error = %err, "no agent card; using URL as direct endpoint");
                client = client.with_direct_endpoint();
            }
        }
        Ok(client)
    }
}

fn map_send_error(err: A2AError, url: &str) -> DelegateError {
    match err {
        A2AError::Transport(e) => {
            DelegateError::Unreachable(format!("could not connect to agent at {url}: {e}"))
        }
        other => other.into(),
    }
}
