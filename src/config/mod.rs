//! Configuration: endpoint descriptors and the TOML config file

mod endpoint;
mod file;

pub use endpoint::{is_placeholder, EndpointConfig, API_KEY_PLACEHOLDER};
pub use file::{ConfigFile, DisabledEndpoints, Settings, MAX_INTERVAL_SECS};
