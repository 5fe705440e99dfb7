use anyhow::Context;
use clap::Parser;
use nasmon::{DEFAULT_STATUS_PORT, StatusMonitor, router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serves a NAS appliance's XML status port as JSON over HTTP, with a
/// pass/warn/fail health endpoint.
#[derive(Parser)]
#[command(name = "nasmon", version, about)]
struct Cli {
    /// Hostname or address of the appliance
    #[arg(long)]
    appliance: String,

    /// TCP port of the appliance status service
    #[arg(long, default_value_t = DEFAULT_STATUS_PORT)]
    appliance_port: u16,

    /// Local address to serve the HTTP API on
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nasmon=info")),
        )
        .init();

    let cli = Cli::parse();

    let monitor = StatusMonitor::builder()
        .host(cli.appliance.clone())
        .port(cli.appliance_port)
        .build()
        .context("invalid appliance configuration")?;

    let listener = TcpListener::bind(&cli.listen)
        .await
        .with_context(|| format!("could not bind {}", cli.listen))?;

    info!(
        appliance = %format!("{}:{}", cli.appliance, cli.appliance_port),
        listen = %cli.listen,
        "serving appliance status API"
    );

    axum::serve(listener, router(Arc::new(monitor)))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
