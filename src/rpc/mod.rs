//! Chain-tip probing over HTTP and WebSocket endpoints

mod defaults;
mod envelope;
mod http;
mod poll;
mod pool;
mod socket;
mod status;
mod transport;

pub use defaults::default_endpoints;
pub use envelope::{rpc_body, METHOD};
pub use http::HttpProbe;
pub use poll::PollUnit;
pub use pool::EndpointPool;
pub use socket::SocketProbe;
pub use status::{decode_height, ChainStatus, RawProbeOutcome};
pub use transport::{Probe, Transport, TransportKind};
