//! YAML-loadable configuration for the delegation client.
//!
//! ```yaml
//! agents:
//!   notion_agent: "http://localhost:8002"
//!   elevenlabs_agent: "http://localhost:8003"
//! poll:
//!   max_attempts: 10
//!   retry_delay_secs: 2
//! bridge_timeout_secs: 90
//! ```
//!
//! Every section defaults when omitted.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::client::DEFAULT_BRIDGE_TIMEOUT;
use crate::error::DelegateError;
use crate::poller::RetryPolicy;
use crate::registry::EndpointRegistry;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DelegateConfig {
    /// Logical agent name → base URL.
    #[serde(default)]
    pub agents: BTreeMap<String, String>,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default = "default_bridge_timeout_secs")]
    pub bridge_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_max_attempts() -> u32 {
    RetryPolicy::default().max_attempts
}

fn default_retry_delay_secs() -> u64 {
    RetryPolicy::default().retry_delay.as_secs()
}

fn default_bridge_timeout_secs() -> u64 {
    DEFAULT_BRIDGE_TIMEOUT.as_secs()
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            agents: BTreeMap::new(),
            poll: PollConfig::default(),
            bridge_timeout_secs: default_bridge_timeout_secs(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl PollConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.retry_delay_secs))
    }
}

impl DelegateConfig {
    // Missing top-level keys all have defaults, so "{}" and even an agents-only
    // file parse cleanly.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DelegateError> {
        serde_yaml::from_str(yaml).map_err(|e| DelegateError::Config(e.to_string()))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DelegateError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DelegateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn registry(&self) -> EndpointRegistry {
        self.agents
            .iter()
            .map(|(name, url)| (name.clone(), url.clone()))
            .collect()
    }

    pub fn bridge_timeout(&self) -> Duration {
        Duration::from_secs(self.bridge_timeout_secs)
    }
}
