//! Agent card: the self-describing manifest served at the well-known path.

use serde::{Deserialize, Serialize};

/// Minimal agent manifest. Only the fields the delegation client consumes
/// are modeled; anything else in the descriptor is ignored on parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Legacy single-URL form; newer descriptors list interfaces instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_interfaces: Vec<AgentInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Transport interface declaration within an agent card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInterface {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_binding: Option<String>,
}

impl AgentCard {
    /// The JSON-RPC invocation URL this card advertises, if any.
    pub fn rpc_url(&self) -> Option<&str> {
        self.supported_interfaces
            .first()
            .map(|iface| iface.url.as_str())
            .or(self.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_url_prefers_interface_list() {
        let card = AgentCard {
            name: "notion_agent".to_string(),
            url: Some("http://localhost:8002/legacy".to_string()),
            supported_interfaces: vec![AgentInterface {
                url: "http://localhost:8002/a2a".to_string(),
                protocol_binding: Some("JSONRPC".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(card.rpc_url(), Some("http://localhost:8002/a2a"));
    }

    #[test]
    fn rpc_url_falls_back_to_top_level_url() {
        let card: AgentCard = serde_json::from_value(serde_json::json!({
            "name": "elevenlabs_agent",
            "description": "Audio synthesis",
            "url": "http://localhost:8003"
        }))
        .unwrap();
        assert_eq!(card.rpc_url(), Some("http://localhost:8003"));
    }

    #[test]
    fn card_without_endpoint_yields_none() {
        let card: AgentCard =
            serde_json::from_value(serde_json::json!({"name": "bare"})).unwrap();
        assert!(card.rpc_url().is_none());
    }
}
