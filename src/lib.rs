//! rpc-monitor - chain-tip and latency monitor for Ethereum JSON-RPC endpoints
//!
//! Every configured endpoint is asked for `eth_getBlockByNumber("latest")` over
//! HTTP or WebSocket (picked from the URL scheme). Each poll yields a
//! [`ChainStatus`] with the block height and round-trip latency, or nulls when
//! the endpoint could not answer. One endpoint failing never affects another.
//!
//! # Example
//!
//! ```rust,no_run
//! use rpc_monitor::{EndpointConfig, EndpointPool};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoints = vec![
//!         EndpointConfig::new("https://eth.llamarpc.com"),
//!         EndpointConfig::new("wss://ethereum-rpc.publicnode.com"),
//!     ];
//!
//!     let pool = EndpointPool::new(&endpoints, Duration::from_secs(10))?;
//!     for status in pool.poll_all().await {
//!         println!("{} {:?} {:?}", status.url, status.height, status.latency);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod poller;
pub mod rpc;

// Re-exports for convenience
pub use config::{ConfigFile, EndpointConfig, Settings};
pub use error::{ConfigError, Error, OutputError, Result, RpcError};
pub use output::{render, OutputFormat};
pub use poller::Poller;
pub use rpc::{
    default_endpoints, ChainStatus, EndpointPool, HttpProbe, PollUnit, Probe, RawProbeOutcome,
    SocketProbe, Transport, TransportKind,
};
