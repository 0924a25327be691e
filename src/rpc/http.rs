//! Request/response probe over HTTP(S)

use crate::config::is_placeholder;
use crate::error::RpcError;
use crate::rpc::{rpc_body, Probe, RawProbeOutcome};
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;

/// HTTP probe; cloning shares the underlying connection pool
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a probe with its own client
    pub fn new() -> std::result::Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rpc-monitor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RpcError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    async fn fetch(&self, url: &str) -> std::result::Result<RawProbeOutcome, RpcError> {
        if is_placeholder(url) {
            return Err(RpcError::Placeholder);
        }

        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(rpc_body())
            .send()
            .await?;

        // Error responses are not latency samples
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let latency = start.elapsed();

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;

        tracing::trace!("{} answered in {}ms", url, latency.as_millis());
        Ok(RawProbeOutcome::new(body, latency))
    }
}
