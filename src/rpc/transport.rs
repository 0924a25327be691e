//! Transport selection and the probe contract both transports share

use crate::error::RpcError;
use crate::rpc::{HttpProbe, RawProbeOutcome, SocketProbe};
use std::fmt;
use std::future::Future;

/// One chain-tip exchange against an endpoint.
///
/// Implementations perform the I/O and latency measurement only; deadlines and
/// error absorption live in [`crate::rpc::PollUnit`].
pub trait Probe: Send + Sync {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<RawProbeOutcome, RpcError>> + Send;
}

/// Which transport a URL needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Request/response over HTTP(S)
    Http,
    /// Persistent WebSocket connection
    Socket,
}

impl TransportKind {
    /// `ws://` and `wss://` go over a socket, everything else over HTTP
    pub fn for_url(url: &str) -> Self {
        let url = url.trim_start();
        let scheme_end = url.find("://").unwrap_or(0);
        let scheme = url[..scheme_end].to_ascii_lowercase();
        match scheme.as_str() {
            "ws" | "wss" => TransportKind::Socket,
            _ => TransportKind::Http,
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TransportKind::Http => "http",
            TransportKind::Socket => "ws",
        })
    }
}

/// Concrete probe bound to an endpoint
#[derive(Debug, Clone)]
pub enum Transport {
    Http(HttpProbe),
    Socket(SocketProbe),
}

impl Transport {
    /// Pick the probe for a URL. HTTP probes share `http`'s connection pool.
    pub fn for_url(url: &str, http: &HttpProbe) -> Self {
        match TransportKind::for_url(url) {
            TransportKind::Http => Transport::Http(http.clone()),
            TransportKind::Socket => Transport::Socket(SocketProbe::new()),
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Transport::Http(_) => TransportKind::Http,
            Transport::Socket(_) => TransportKind::Socket,
        }
    }
}

impl Probe for Transport {
    async fn fetch(&self, url: &str) -> std::result::Result<RawProbeOutcome, RpcError> {
        match self {
            Transport::Http(probe) => probe.fetch(url).await,
            Transport::Socket(probe) => probe.fetch(url).await,
        }
    }
}
