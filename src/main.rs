//! Checkmate UI server.
//!
//! Serves the URL reduction API in front of the Checkmate URL analyzer.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser ──▶ http (axum) ──▶ session store ──▶ reduce engine
//!                   │                                (toggle, reconstruct)
//!                   ▼
//!               analyzer client ──▶ Checkmate /ui/api/analyze
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use checkmate_ui::config::{load_config, UiConfig};
use checkmate_ui::lifecycle::{signals, Shutdown};
use checkmate_ui::observability::{logging, metrics};
use checkmate_ui::HttpServer;

#[derive(Parser)]
#[command(name = "checkmate-ui")]
#[command(about = "Interactive URL reduction for Checkmate", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => UiConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("checkmate-ui v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        analyzer = %config.analyzer.base_url,
        max_sessions = config.sessions.max_sessions,
        idle_ttl_secs = config.sessions.idle_ttl_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let sweeper_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config)?;
    let sweeper = tokio::spawn(server.sessions().run_sweeper(sweeper_shutdown));
    server.run(listener, server_shutdown).await?;
    let _ = sweeper.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
