// src/main.rs

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use textfile_organizer::api::create_router;
use textfile_organizer::config::ServerConfig;
use textfile_organizer::state::create_app_state;

#[derive(Parser)]
#[command(name = "textfile-organizer")]
#[command(about = "Serve a flat directory of text notes over HTTP", long_about = None)]
struct Cli {
    /// Address to bind (overrides ORGANIZER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides ORGANIZER_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the text files (overrides ORGANIZER_STORAGE_DIR)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// HTML page served at /organizer (overrides ORGANIZER_PAGE_PATH)
    #[arg(long)]
    page_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn into_config(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(storage_dir) = self.storage_dir {
            config.storage_dir = storage_dir;
        }
        if let Some(page_path) = self.page_path {
            config.page_path = page_path;
        }
        config
    }
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.into_config(ServerConfig::from_env());
    let app_state = create_app_state(&config);
    app_state.store.ensure_root().await?;

    let app = create_router(app_state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Server is running on http://localhost:{}", config.port);
    info!("Visit http://localhost:{}/organizer to access the frontend", config.port);
    info!("Serving page from {}", config.page_path.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
