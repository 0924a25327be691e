//! Configuration management commands

use crate::config::ConfigFile;
use crate::rpc::default_endpoints;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Show current config
    Show,

    /// Write a config file seeded with the built-in endpoints
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn handle(action: &ConfigCommands, path: &Path, current: &ConfigFile) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            if !path.exists() {
                println!("# {} does not exist, showing defaults", path.display());
            }
            print!("{}", toml::to_string_pretty(current)?);
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            let config = ConfigFile {
                endpoints: default_endpoints(),
                ..Default::default()
            };
            config.save(path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
