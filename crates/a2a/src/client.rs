//! HTTP-based A2A client: agent-card discovery plus the two JSON-RPC calls
//! the delegation pipeline needs.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::A2AError;
use crate::jsonrpc::{self, JsonRpcRequest, JsonRpcResponse};
use crate::types::agent_card::AgentCard;
use crate::types::core::Task;
use crate::types::requests::{GetTaskRequest, SendMessageRequest};
use crate::types::responses::SendMessageReply;

/// Fixed path at which every agent exposes its descriptor.
pub const WELL_KNOWN_PATH: &str = "/.well-known/agent-card.json";

/// A2A HTTP client for one remote agent.
///
/// Performs single round trips only; retry policy lives with the caller.
/// The underlying `reqwest::Client` may be shared across instances — it
/// carries no per-agent state beyond the connection pool.
pub struct A2AClient {
    http: Client,
    base_url: String,
    agent_card: Option<AgentCard>,
    rpc_url: Option<String>,
}

impl A2AClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            agent_card: None,
            rpc_url: None,
        }
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn with_agent_card(mut self, card: AgentCard) -> Self {
        if let Some(url) = card.rpc_url() {
            self.rpc_url = Some(url.to_string());
        }
        self.agent_card = Some(card);
        self
    }

    /// Treat the base URL itself as the JSON-RPC endpoint. Used when the
    /// well-known descriptor is unavailable but the endpoint is known to
    /// speak JSON-RPC directly.
    pub fn with_direct_endpoint(mut self) -> Self {
        self.rpc_url = Some(self.base_url.clone());
        self
    }

    pub fn agent_card(&self) -> Option<&AgentCard> {
        self.agent_card.as_ref()
    }

    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    /// Fetch the agent card from the well-known URL and resolve the
    /// invocation endpoint from it.
    pub async fn fetch_agent_card(&mut self) -> Result<AgentCard, A2AError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), WELL_KNOWN_PATH);
        let resp = self.http.get(&url).send().await?;

        let card: AgentCard = resp
            .json()
            .await
            .map_err(|e| A2AError::malformed(format!("agent card: {e}")))?;

        debug!(agent = %card.name, rpc_url = ?card.rpc_url(), "fetched agent card");

        if let Some(url) = card.rpc_url() {
            self.rpc_url = Some(url.to_string());
        } else {
            return Err(A2AError::malformed(
                "agent card declares no invocation URL",
            ));
        }
        self.agent_card = Some(card.clone());
        Ok(card)
    }

    async fn invoke_rpc<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, A2AError> {
        let url = self.rpc_url.as_deref().ok_or_else(|| {
            A2AError::malformed("no RPC endpoint resolved; fetch the agent card first")
        })?;

        let envelope_id = serde_json::Value::String(uuid::Uuid::new_v4().to_string());
        let request = JsonRpcRequest::new(method, envelope_id, Some(params));

        let resp = self.http.post(url).json(&request).send().await?;

        let rpc_resp: JsonRpcResponse = resp
            .json()
            .await
            .map_err(|e| A2AError::malformed(e.to_string()))?;

        if let Some(err) = rpc_resp.error {
            return Err(A2AError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        let result = rpc_resp
            .result
            .ok_or_else(|| A2AError::malformed("response carries neither result nor error"))?;

        serde_json::from_value(result).map_err(|e| A2AError::malformed(e.to_string()))
    }

    /// Send one message to the remote agent. A single round trip; the reply
    /// is either an inline message or a task record to poll.
    pub async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageReply, A2AError> {
        let params = serde_json::to_value(&request)
            .map_err(|e| A2AError::malformed(e.to_string()))?;
        self.invoke_rpc(jsonrpc::methods::SEND_MESSAGE, params).await
    }

    /// Query the current record of a previously returned task handle.
    pub async fn get_task(&self, request: GetTaskRequest) -> Result<Task, A2AError> {
        let params = serde_json::to_value(&request)
            .map_err(|e| A2AError::malformed(e.to_string()))?;
        self.invoke_rpc(jsonrpc::methods::GET_TASK, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::agent_card::AgentInterface;

    #[test]
    fn new_client_has_no_endpoint() {
        let client = A2AClient::new("http://localhost:8002");
        assert!(client.agent_card().is_none());
        assert!(client.rpc_url().is_none());
    }

    #[test]
    fn with_agent_card_resolves_rpc_url() {
        let card = AgentCard {
            name: "notion_agent".to_string(),
            supported_interfaces: vec![AgentInterface {
                url: "http://localhost:8002/a2a".to_string(),
                protocol_binding: Some("JSONRPC".to_string()),
            }],
            ..Default::default()
        };
        let client = A2AClient::new("http://localhost:8002").with_agent_card(card);
        assert_eq!(client.rpc_url(), Some("http://localhost:8002/a2a"));
    }

    #[test]
    fn direct_endpoint_uses_base_url() {
        let client = A2AClient::new("http://localhost:8002/rpc").with_direct_endpoint();
        assert_eq!(client.rpc_url(), Some("http://localhost:8002/rpc"));
    }
}
