//! Logical agent name → endpoint URL mapping.

use std::collections::HashMap;

use crate::error::DelegateError;

/// Maps logical agent names to base URLs.
///
/// Built once at startup and read-only afterwards. Resolution is a pure
/// lookup: unknown names fail fast, with the valid names in the error,
/// before any network call is attempted.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: HashMap<String, String>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.endpoints.insert(name.into(), url.into());
        self
    }

    pub fn resolve(&self, name: &str) -> Result<&str, DelegateError> {
        self.endpoints
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| DelegateError::UnknownAgent {
                name: name.to_string(),
                known: self.agent_names(),
            })
    }

    /// Registered names, sorted for stable error messages.
    pub fn agent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.endpoints.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<(String, String)> for EndpointRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            endpoints: iter.into_iter().collect(),
        }
    }
}
