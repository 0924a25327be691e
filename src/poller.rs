//! Fixed-interval poll driver
//!
//! Re-runs the whole pool on a shared interval, keeps the latest status per
//! URL and publishes every completed batch on a watch channel.

use crate::rpc::{ChainStatus, EndpointPool, Probe, Transport};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Interval driver around an [`EndpointPool`]
pub struct Poller<P = Transport> {
    pool: EndpointPool<P>,
    interval: Duration,
    cache: HashMap<String, ChainStatus>,
    tx: watch::Sender<Vec<ChainStatus>>,
}

impl<P: Probe> Poller<P> {
    pub fn new(pool: EndpointPool<P>, interval: Duration) -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            pool,
            interval,
            cache: HashMap::new(),
            tx,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pool(&self) -> &EndpointPool<P> {
        &self.pool
    }

    /// Receive every completed batch
    pub fn subscribe(&self) -> watch::Receiver<Vec<ChainStatus>> {
        self.tx.subscribe()
    }

    /// Latest status seen for a URL
    pub fn cached(&self, url: &str) -> Option<&ChainStatus> {
        self.cache.get(url)
    }

    /// Run one cycle over every endpoint, update the cache and publish
    pub async fn poll_once(&mut self) -> Vec<ChainStatus> {
        let batch = self.pool.poll_all().await;

        let known = batch.iter().filter(|s| s.is_known()).count();
        tracing::info!("poll cycle: {}/{} endpoints answered", known, batch.len());

        for status in &batch {
            self.cache.insert(status.url.clone(), status.clone());
        }
        self.tx.send_replace(batch.clone());
        batch
    }

    /// Poll on every tick until `shutdown` resolves.
    ///
    /// The first cycle starts immediately. A cycle always finishes before the
    /// next tick is taken, so no endpoint is polled twice concurrently.
    pub async fn run<S, F>(mut self, shutdown: S, mut on_batch: F)
    where
        S: Future<Output = ()>,
        F: FnMut(&[ChainStatus]),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!("poller shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    let batch = self.poll_once().await;
                    on_batch(&batch);
                }
            }
        }
    }
}
