//! Probe outcomes and their normalized per-endpoint status

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Decoded response body plus the latency a probe measured for it
#[derive(Debug, Clone, PartialEq)]
pub struct RawProbeOutcome {
    /// JSON-RPC response body
    pub body: Value,
    /// Round trip in milliseconds, `None` when the sample is not trustworthy
    pub latency: Option<u64>,
}

impl RawProbeOutcome {
    /// Outcome with a measured round trip
    pub fn new(body: Value, elapsed: Duration) -> Self {
        Self {
            body,
            latency: Some(elapsed.as_millis() as u64),
        }
    }

    /// Outcome without a latency sample
    pub fn without_latency(body: Value) -> Self {
        Self {
            body,
            latency: None,
        }
    }

    /// `result.number` of the response, if the node sent one
    pub fn block_number(&self) -> Option<&str> {
        self.body.get("result")?.get("number")?.as_str()
    }
}

/// Canonical per-endpoint poll result
///
/// `latency` is only ever set together with `height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
    /// Endpoint URL (the poll key)
    pub url: String,
    /// Latest block height
    pub height: Option<u64>,
    /// Round trip in milliseconds
    pub latency: Option<u64>,
}

impl ChainStatus {
    /// Status for an endpoint that produced nothing usable
    pub fn unknown(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            height: None,
            latency: None,
        }
    }

    /// Shape a probe outcome (or its absence) into a status
    pub fn normalize(url: impl Into<String>, outcome: Option<&RawProbeOutcome>) -> Self {
        let height = outcome
            .and_then(RawProbeOutcome::block_number)
            .and_then(decode_height);

        match height {
            Some(height) => Self {
                url: url.into(),
                height: Some(height),
                latency: outcome.and_then(|o| o.latency),
            },
            None => Self::unknown(url),
        }
    }

    /// True when the endpoint reported a height this cycle
    pub fn is_known(&self) -> bool {
        self.height.is_some()
    }
}

/// Decode a hex quantity such as `0x1b4`
pub fn decode_height(hex: &str) -> Option<u64> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
