//! One-shot chain-tip probe over a WebSocket connection
//!
//! Each fetch opens a fresh connection, sends the request as its only outbound
//! message, resolves on the first inbound data frame and closes the socket.
//! Ping/pong frames are not responses and are skipped.

use crate::config::is_placeholder;
use crate::error::RpcError;
use crate::rpc::{rpc_body, Probe, RawProbeOutcome};
use futures::{SinkExt, StreamExt};
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where a socket exchange stood when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Connecting,
    Open,
    AwaitingResponse,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Connecting => write!(f, "connecting"),
            Phase::Open => write!(f, "sending request"),
            Phase::AwaitingResponse => write!(f, "awaiting response"),
        }
    }
}

fn transport_error(phase: Phase, err: impl fmt::Display) -> RpcError {
    RpcError::ConnectionFailed(format!("{}: {}", phase, err))
}

/// tungstenite only accepts a lowercase `ws`/`wss` scheme
fn connect_url(url: &str) -> Cow<'_, str> {
    let url = url.trim_start();
    match url.split_once("://") {
        Some((scheme, rest)) if scheme.bytes().any(|b| b.is_ascii_uppercase()) => {
            Cow::Owned(format!("{}://{}", scheme.to_ascii_lowercase(), rest))
        }
        _ => Cow::Borrowed(url),
    }
}

/// rustls 0.23 needs a process-level CryptoProvider before the first `wss://` handshake.
fn install_rustls_crypto_provider() {
    static INSTALLED: OnceLock<()> = OnceLock::new();
    INSTALLED.get_or_init(|| {
        // Err means another component already installed one
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// WebSocket probe
#[derive(Debug, Clone, Default)]
pub struct SocketProbe;

impl SocketProbe {
    pub fn new() -> Self {
        Self
    }

    async fn exchange(stream: &mut WsStream) -> std::result::Result<RawProbeOutcome, RpcError> {
        let start = Instant::now();
        stream
            .send(Message::text(rpc_body().to_owned()))
            .await
            .map_err(|e| transport_error(Phase::Open, e))?;

        loop {
            let message = match stream.next().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => return Err(transport_error(Phase::AwaitingResponse, e)),
                None => {
                    return Err(RpcError::InvalidResponse(
                        "connection ended before a response".to_string(),
                    ))
                }
            };

            let payload = match message {
                Message::Text(text) => text.as_bytes().to_vec(),
                Message::Binary(data) => data.to_vec(),
                Message::Close(_) => {
                    return Err(RpcError::InvalidResponse(
                        "connection closed before a response".to_string(),
                    ))
                }
                _ => continue,
            };

            let latency = start.elapsed();
            let body = serde_json::from_slice(&payload)
                .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
            return Ok(RawProbeOutcome::new(body, latency));
        }
    }
}

impl Probe for SocketProbe {
    async fn fetch(&self, url: &str) -> std::result::Result<RawProbeOutcome, RpcError> {
        if is_placeholder(url) {
            return Err(RpcError::Placeholder);
        }

        install_rustls_crypto_provider();

        let target = connect_url(url);
        let (mut stream, _) = connect_async(&*target)
            .await
            .map_err(|e| transport_error(Phase::Connecting, e))?;

        let outcome = Self::exchange(&mut stream).await;

        if let Err(e) = stream.close(None).await {
            tracing::trace!("closing {}: {}", url, e);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_in_error() {
        let err = transport_error(Phase::Connecting, "refused");
        assert_eq!(err.to_string(), "Connection failed: connecting: refused");
    }

    #[test]
    fn test_connect_url_lowercases_scheme() {
        assert_eq!(connect_url("WSS://Node.Example/Path"), "wss://Node.Example/Path");
        assert_eq!(connect_url("Ws://127.0.0.1:8546"), "ws://127.0.0.1:8546");
        assert!(matches!(connect_url("wss://node.example"), Cow::Borrowed(_)));
    }

    #[tokio::test]
    async fn test_placeholder_is_never_dialed() {
        let result = SocketProbe::new()
            .fetch("wss://eth.example/v2/API_KEY")
            .await;
        assert!(matches!(result, Err(RpcError::Placeholder)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = SocketProbe::new().fetch(&format!("ws://{}", addr)).await;
        assert!(matches!(result, Err(RpcError::ConnectionFailed(_))));
    }
}
