//! RPC endpoint configuration

use crate::rpc::TransportKind;
use serde::{Deserialize, Serialize};

/// Marker left in provider URLs whose key has not been filled in
pub const API_KEY_PLACEHOLDER: &str = "API_KEY";

/// Configuration for a single monitored endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// RPC URL (`http(s)://` or `ws(s)://`)
    pub url: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether this endpoint is polled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl EndpointConfig {
    /// Create a new endpoint config with defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            enabled: true,
        }
    }

    /// Builder-style setter for name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Transport selected by the URL scheme
    pub fn transport(&self) -> TransportKind {
        TransportKind::for_url(&self.url)
    }

    /// True when the URL still carries the unfilled `API_KEY` token
    pub fn is_placeholder(&self) -> bool {
        is_placeholder(&self.url)
    }

    /// Name if set, otherwise the URL
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

/// Check a URL for the unfilled `API_KEY` token
pub fn is_placeholder(url: &str) -> bool {
    url.contains(API_KEY_PLACEHOLDER)
}
