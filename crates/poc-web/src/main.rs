//! poc-desk server binary.
//!
//! Reads `poc-desk.toml` (or the path given with `--config`) plus `POC_*`
//! environment variables, opens the configured store, and serves the page
//! over HTTP. A store that fails to open does not stop the server: every
//! page shows the connection error instead.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use poc_web::{
  AppState,
  settings::{DEFAULT_CONFIG_FILE, ServerConfig},
  store::{self, StoreHandle},
};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "School & college point-of-contact desk")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read configuration from {:?}", cli.config))?;

  let handle = match store::connect(&server_cfg).await {
    Ok(store) => {
      tracing::info!(backend = ?server_cfg.backend, "store ready");
      StoreHandle::ready(store)
    }
    Err(e) => {
      tracing::error!(error = %e, "store unavailable; serving connection banner");
      StoreHandle::unavailable(e.to_string())
    }
  };

  let app = poc_web::router(AppState::new(handle));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
