//! Per-endpoint poll unit

use crate::config::EndpointConfig;
use crate::error::RpcError;
use crate::rpc::{ChainStatus, HttpProbe, Probe, RawProbeOutcome, Transport, TransportKind};
use std::time::Duration;

/// Reusable poll handle for one endpoint, keyed by its URL.
///
/// `poll` never fails: skips, transport errors, malformed responses and
/// deadline expiry all come back as an unknown [`ChainStatus`].
#[derive(Debug, Clone)]
pub struct PollUnit<P = Transport> {
    endpoint: EndpointConfig,
    probe: P,
    timeout: Duration,
}

impl PollUnit<Transport> {
    /// Bind an endpoint to the probe its scheme calls for
    pub fn new(endpoint: EndpointConfig, http: &HttpProbe, timeout: Duration) -> Self {
        let probe = Transport::for_url(&endpoint.url, http);
        Self {
            endpoint,
            probe,
            timeout,
        }
    }

    /// Transport this unit polls over
    pub fn transport(&self) -> TransportKind {
        self.probe.kind()
    }
}

impl<P: Probe> PollUnit<P> {
    /// Bind an endpoint to an explicit probe
    pub fn with_probe(endpoint: EndpointConfig, probe: P, timeout: Duration) -> Self {
        Self {
            endpoint,
            probe,
            timeout,
        }
    }

    /// Cache key (the endpoint URL)
    pub fn key(&self) -> &str {
        &self.endpoint.url
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the probe under the deadline, absorbing every failure
    pub async fn fetch(&self) -> Option<RawProbeOutcome> {
        let url = self.key();

        if self.endpoint.is_placeholder() {
            tracing::trace!("skipping unconfigured endpoint {}", url);
            return None;
        }

        let result = match tokio::time::timeout(self.timeout, self.probe.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(RpcError::Timeout(self.timeout.as_millis() as u64)),
        };

        match result {
            Ok(outcome) => Some(outcome),
            Err(RpcError::Placeholder) => None,
            Err(e) => {
                tracing::debug!("poll of {} failed: {}", url, e);
                None
            }
        }
    }

    /// One poll cycle: fetch, then normalize
    pub async fn poll(&self) -> ChainStatus {
        let outcome = self.fetch().await;
        ChainStatus::normalize(self.key(), outcome.as_ref())
    }
}
