//! Built-in Ethereum mainnet endpoints
//!
//! Keyed providers are listed with the `API_KEY` placeholder; they are shown
//! but not polled until the key is filled in through the config file.

use crate::config::EndpointConfig;

/// Endpoints used when neither `--rpc` nor a config file names any
pub fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig::new("https://eth.llamarpc.com").with_name("LlamaNodes"),
        EndpointConfig::new("https://ethereum-rpc.publicnode.com").with_name("PublicNode"),
        EndpointConfig::new("wss://ethereum-rpc.publicnode.com").with_name("PublicNode WS"),
        EndpointConfig::new("https://rpc.flashbots.net").with_name("Flashbots"),
        EndpointConfig::new("https://eth.drpc.org").with_name("dRPC"),
        EndpointConfig::new("https://eth-mainnet.public.blastapi.io").with_name("Blast"),
        EndpointConfig::new("https://eth-mainnet.g.alchemy.com/v2/API_KEY").with_name("Alchemy"),
        EndpointConfig::new("wss://eth-mainnet.g.alchemy.com/v2/API_KEY")
            .with_name("Alchemy WS"),
        EndpointConfig::new("https://mainnet.infura.io/v3/API_KEY").with_name("Infura"),
        EndpointConfig::new("wss://mainnet.infura.io/ws/v3/API_KEY").with_name("Infura WS"),
    ]
}
