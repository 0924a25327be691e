//! Endpoint pool: one poll unit per configured endpoint, polled concurrently

use crate::config::EndpointConfig;
use crate::error::Result;
use crate::rpc::{ChainStatus, HttpProbe, PollUnit, Probe, Transport};
use futures::future::join_all;
use std::time::Duration;

/// Pool of poll units, in configured order
#[derive(Debug, Clone)]
pub struct EndpointPool<P = Transport> {
    units: Vec<PollUnit<P>>,
}

impl EndpointPool<Transport> {
    /// Create a pool for the given endpoints.
    ///
    /// Every entry gets a unit, including placeholders and duplicates, so that
    /// results line up with the input by position.
    pub fn new(endpoints: &[EndpointConfig], timeout: Duration) -> Result<Self> {
        let http = HttpProbe::new()?;
        let units = endpoints
            .iter()
            .map(|cfg| PollUnit::new(cfg.clone(), &http, timeout))
            .collect();

        Ok(Self { units })
    }
}

impl<P: Probe> EndpointPool<P> {
    /// Create a pool from prebuilt units
    pub fn from_units(units: Vec<PollUnit<P>>) -> Self {
        Self { units }
    }

    /// Number of endpoints
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[PollUnit<P>] {
        &self.units
    }

    /// Cache keys, in order
    pub fn keys(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.key()).collect()
    }

    /// Poll every endpoint at once.
    ///
    /// The result has one entry per unit, in unit order; a failing endpoint
    /// shows up as an unknown status and never affects the others.
    pub async fn poll_all(&self) -> Vec<ChainStatus> {
        join_all(self.units.iter().map(|unit| unit.poll())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RpcError;
    use crate::rpc::RawProbeOutcome;
    use serde_json::json;

    /// Answers with the height encoded in the URL's last path segment, fails otherwise
    #[derive(Clone)]
    struct PathProbe;

    impl Probe for PathProbe {
        async fn fetch(&self, url: &str) -> std::result::Result<RawProbeOutcome, RpcError> {
            let tail = url.rsplit('/').next().unwrap_or_default();
            if tail.starts_with("0x") {
                Ok(RawProbeOutcome::new(
                    json!({"result": {"number": tail}}),
                    Duration::from_millis(3),
                ))
            } else {
                Err(RpcError::ConnectionFailed("unreachable".to_string()))
            }
        }
    }

    fn pool(urls: &[&str]) -> EndpointPool<PathProbe> {
        EndpointPool::from_units(
            urls.iter()
                .map(|u| {
                    PollUnit::with_probe(EndpointConfig::new(*u), PathProbe, Duration::from_secs(1))
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let pool = pool(&[
            "https://a.example/0x64",
            "https://b.example/down",
            "https://c.example/API_KEY",
            "https://d.example/0x1b4",
        ]);

        let results = pool.poll_all().await;
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].height, Some(100));
        assert_eq!(results[1], ChainStatus::unknown("https://b.example/down"));
        assert_eq!(results[2], ChainStatus::unknown("https://c.example/API_KEY"));
        assert_eq!(results[3].height, Some(436));
        assert_eq!(pool.keys()[3], "https://d.example/0x1b4");

        for status in &results {
            assert!(status.height.is_some() || status.latency.is_none());
        }
    }

    #[tokio::test]
    async fn test_all_failing() {
        let pool = pool(&["https://a.example/x", "https://b.example/y"]);
        let results = pool.poll_all().await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|s| !s.is_known()));
    }

    #[tokio::test]
    async fn test_empty_pool() {
        let pool = pool(&[]);
        assert!(pool.is_empty());
        assert!(pool.poll_all().await.is_empty());
    }

    #[test]
    fn test_new_keeps_every_entry() {
        let endpoints = vec![
            EndpointConfig::new("https://node.example"),
            EndpointConfig::new("wss://node.example"),
            EndpointConfig::new("https://node.example"),
        ];
        let pool = EndpointPool::new(&endpoints, Duration::from_secs(5)).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(
            pool.keys(),
            vec!["https://node.example", "wss://node.example", "https://node.example"]
        );
    }
}
