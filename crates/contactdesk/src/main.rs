use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contactdesk::config::{self, Config};
use contactdesk::llm::{self, Assistant};
use contactdesk::server::{self, AppState};

#[derive(Debug, Parser)]
#[command(name = "contactdesk", version, about = "Summarize customer messages and draft replies")]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Dotenv file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load before the subscriber so RUST_LOG may come from the file.
    let env_file = config::load_env_file(cli.env_file.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contactdesk=info")),
        )
        .init();

    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let client = llm::build_http_client().context("failed to build HTTP client")?;
    let state = AppState {
        assistant: Assistant::from_config(&config.ai, client),
    };
    let app = server::build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
