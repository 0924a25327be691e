//! rpc-monitor CLI - watch block height and latency across RPC endpoints

use clap::Parser;
use rpc_monitor::cli::{config, endpoints, Cli, Commands};
use rpc_monitor::{render, ConfigError, ConfigFile, EndpointPool, OutputFormat, Poller};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    match &cli.command {
        Some(Commands::Config { action }) => {
            let path = cli.config_path();
            let current = if path.exists() {
                ConfigFile::load(&path)?
            } else {
                ConfigFile::default()
            };
            return config::handle(action, &path, &current);
        }
        Some(Commands::Endpoints { action }) => {
            let file = cli.load_config()?;
            return endpoints::handle(action, &cli.endpoints(&file)?);
        }
        Some(Commands::Once) => return run(&cli, false).await,
        Some(Commands::Watch) | None => {}
    }

    run(&cli, true).await
}

async fn run(cli: &Cli, watch: bool) -> anyhow::Result<()> {
    let format: OutputFormat = cli.format.parse()?;
    let file = cli.load_config()?;
    let settings = cli.settings(&file)?;

    let endpoints = cli.endpoints(&file)?;
    if endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints.into());
    }

    let timeout = settings.timeout();
    let pool = EndpointPool::new(&endpoints, timeout)?;
    tracing::info!(
        "polling {} endpoints every {}s (deadline {}ms)",
        pool.len(),
        settings.interval_secs,
        timeout.as_millis()
    );

    let mut poller = Poller::new(pool, settings.interval());

    if !watch {
        let batch = poller.poll_once().await;
        print!("{}", render(&batch, format)?);
        return Ok(());
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    poller
        .run(shutdown, |batch| match render(batch, format) {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::warn!("failed to render results: {}", e),
        })
        .await;

    Ok(())
}
