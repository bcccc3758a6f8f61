use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use storefront::api::{create_router, handlers::AppState};
use storefront_core::config::Config;
use storefront_remote::VectorIndex;

#[derive(Parser)]
#[command(name = "storefront", about = "Faceted product search over a vector index")]
struct Cli {
    /// Write debug logs to /tmp/storefront-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Extra config file layered over ~/.config/storefront/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Serve POST /api/products (default).
    Serve {
        /// Listen address, overriding server.bind.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Browse the catalog interactively from the terminal.
    Browse {
        /// Products endpoint base URL, overriding session.api_url.
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Cmd::Serve { bind: None }) {
        Cmd::Serve { bind } => serve(&config, bind.as_deref().unwrap_or(&config.server.bind)).await,
        Cmd::Browse { api_url } => {
            let api_url = api_url.as_deref().unwrap_or(&config.session.api_url);
            storefront::browse::run(&config, api_url).await
        }
    }
}

async fn serve(config: &Config, bind: &str) -> anyhow::Result<()> {
    let index = Arc::new(VectorIndex::new(&config.index));
    let state = AppState::new(index, config.ranking.clone(), config.server.flatten_errors);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, index = %config.index.url, "storefront listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/storefront-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter)
            .init();
        tracing::info!("storefront debug log started, tail -f /tmp/storefront-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}
