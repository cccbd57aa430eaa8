use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use quire_api::{QuireConfig, Site};
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "quire", version, about = "A small self-hosted blog")]
struct Cli {
    /// Path of the configuration file. Created by the setup wizard.
    #[arg(short, long, default_value = QuireConfig::filename())]
    config: PathBuf,

    /// Address to listen on, overriding `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding `server.port`.
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = QuireConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.debug |= cli.debug;

    quire_web::telemetry::init(config.server.debug);
    if !cli.config.exists() {
        tracing::warn!(path = %cli.config.display(), "config not found, starting with defaults");
    }

    let site = Arc::new(Site::open(&cli.config, config.clone()).await);
    tracing::info!(stage = %site.stage().await, "site opened");

    let app = quire_web::router(Arc::clone(&site), &config);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server successfully started.");
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    site.close().await;
    tracing::info!("Server successfully shutdown.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Server shutting down...");
}
