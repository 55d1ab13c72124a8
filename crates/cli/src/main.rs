//! # querytail
//!
//! Follows a DNS resolver log and streams each query to connected
//! dashboards over WebSocket.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use querytail_api::AppState;
use querytail_domain::CliOverrides;
use querytail_jobs::{JobRunner, TailRelayJob};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "querytail")]
#[command(version)]
#[command(about = "Live DNS query stream from a resolver log")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Resolver log file to follow
    #[arg(short = 'l', long)]
    log_file: Option<PathBuf>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory with dashboard assets
    #[arg(long)]
    ui_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            log_file: self.log_file.clone(),
            bind_address: self.bind.clone(),
            web_port: self.web_port,
            ui_dir: self.ui_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config_summary(cli.config.as_deref(), &config);

    info!("querytail starting");

    let shutdown = CancellationToken::new();
    let services = di::Services::new(&config);

    let tailer = bootstrap::init_tailer(&config.tail).await?;
    let hub_handle = services
        .hub_runner
        .with_cancellation(shutdown.clone())
        .start();

    let job_handles = JobRunner::new()
        .with_tail_relay(
            TailRelayJob::new(Box::new(tailer), services.relay.clone())
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    let state = AppState::new(services.hub.clone());
    let served = server::start_web_server(&config.server, state, shutdown.clone()).await;

    // Bind failures land here too: stop the background tasks either way.
    shutdown.cancel();
    for handle in job_handles {
        let _ = handle.await;
    }
    let _ = hub_handle.await;

    served?;
    info!("querytail stopped");
    Ok(())
}
