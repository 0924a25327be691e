//! CLI command modules
//!
//! Global flags live on [`Cli`]; each subcommand group has its own module.

pub mod config;
pub mod endpoints;

use crate::config::{ConfigFile, EndpointConfig, Settings};
use crate::error::{ConfigError, Result};
use crate::rpc::default_endpoints;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpc-monitor")]
#[command(
    version,
    about = "Monitor block height and latency of Ethereum RPC endpoints over HTTP and WebSocket"
)]
#[command(after_help = r#"EXAMPLES:
    # Watch the configured (or built-in) endpoints, refreshing every 60s
    rpc-monitor

    # Poll two endpoints once and print JSON
    rpc-monitor once --rpc https://eth.llamarpc.com \
                     --rpc wss://ethereum-rpc.publicnode.com --format json

    # Faster refresh with a tighter deadline
    rpc-monitor watch --interval 15 --timeout 5

URLs containing API_KEY are listed but never contacted.

CONFIG FILE:
    Default: ~/.config/rpc-monitor/config.toml (create with `rpc-monitor config init`)
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Poll only this endpoint (can be repeated)
    #[arg(long = "rpc", action = clap::ArgAction::Append, global = true)]
    pub rpc_urls: Vec<String>,

    /// Config file path
    #[arg(long, env = "RPC_MONITOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Seconds between poll cycles
    #[arg(long, global = true)]
    pub interval: Option<u64>,

    /// Per-endpoint deadline in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(long, default_value = "table", global = true)]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every endpoint on a fixed interval until interrupted (default)
    Watch,

    /// Run a single poll cycle and exit
    Once,

    /// Inspect the endpoint list
    Endpoints {
        #[command(subcommand)]
        action: endpoints::EndpointCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

impl Cli {
    /// Path of the config file in use
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(ConfigFile::default_path)
    }

    /// Load the config file; an explicit `--config` must exist, the default may not
    pub fn load_config(&self) -> Result<ConfigFile> {
        match &self.config {
            Some(path) => ConfigFile::load(path),
            None => Ok(ConfigFile::load_default()?.unwrap_or_default()),
        }
    }

    /// File settings with command-line overrides applied
    pub fn settings(&self, file: &ConfigFile) -> Result<Settings> {
        let mut settings = file.settings.clone();
        if let Some(interval) = self.interval {
            settings.interval_secs = interval;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Endpoints to poll: `--rpc` flags, else the config file, else built-ins
    pub fn endpoints(&self, file: &ConfigFile) -> Result<Vec<EndpointConfig>> {
        if !self.rpc_urls.is_empty() {
            return self.rpc_urls.iter().map(|url| rpc_endpoint(url)).collect();
        }

        if !file.endpoints.is_empty() {
            return Ok(file.active_endpoints());
        }

        Ok(default_endpoints()
            .into_iter()
            .filter(|e| !file.is_endpoint_disabled(&e.url))
            .collect())
    }
}

/// A `--rpc` value needs a scheme and something after it
fn rpc_endpoint(url: &str) -> Result<EndpointConfig> {
    let url = url.trim();
    match url.split_once("://") {
        Some((scheme, rest))
            if !rest.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            Ok(EndpointConfig::new(url))
        }
        _ => Err(ConfigError::InvalidUrl(url.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rpc-monitor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_rpc_flags_replace_config() {
        let cli = parse(&["once", "--rpc", "https://a.example", "--rpc", "wss://b.example"]);
        let file = ConfigFile {
            endpoints: vec![EndpointConfig::new("https://file.example")],
            ..Default::default()
        };

        let urls: Vec<_> = cli
            .endpoints(&file)
            .unwrap()
            .into_iter()
            .map(|e| e.url)
            .collect();
        assert_eq!(urls, vec!["https://a.example", "wss://b.example"]);
    }

    #[test]
    fn test_falls_back_to_defaults() {
        let cli = parse(&[]);
        let endpoints = cli.endpoints(&ConfigFile::default()).unwrap();
        assert_eq!(endpoints.len(), default_endpoints().len());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rpc_flag_needs_scheme() {
        let cli = parse(&["once", "--rpc", "https://a.example", "--rpc", "eth.llamarpc.com"]);
        let err = cli.endpoints(&ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint URL: eth.llamarpc.com"));

        for bad in ["://node.example", "wss://", "8545://node"] {
            assert!(rpc_endpoint(bad).is_err(), "{bad} should be rejected");
        }
        assert_eq!(
            rpc_endpoint("  WSS://node.example ").unwrap().url,
            "WSS://node.example"
        );
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&["watch", "--interval", "30", "--timeout", "3"]);
        let settings = cli.settings(&ConfigFile::default()).unwrap();
        assert_eq!(settings.interval_secs, 30);
        assert_eq!(settings.timeout_secs, 3);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = parse(&["--timeout", "0"]);
        assert!(cli.settings(&ConfigFile::default()).is_err());
    }
}
