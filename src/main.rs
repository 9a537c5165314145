use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use agentforge::config::Config;
use agentforge::generator::ArtifactGenerator;
use agentforge::llm::factory;
use agentforge::server::{self, AppState};

#[derive(Parser)]
#[command(name = "agentforge", version)]
#[command(about = "Generate agent service scaffolds with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to config file (defaults to ./agentforge.toml or
        /// ~/.config/agentforge/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Use the stub completion provider (no API key required)
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            config,
            dry_run,
        } => {
            let config = Config::load_with_path(config)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let provider = factory::create_provider(&config, dry_run)?;
            if dry_run {
                info!("Running with the stub completion provider (--dry-run)");
            } else {
                info!(
                    "Using provider '{}' with model '{}'",
                    config.llm.provider, config.llm.model
                );
            }

            let state = Arc::new(AppState {
                generator: ArtifactGenerator::new(provider),
            });
            let app = server::router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("agentforge listening on http://{}", addr);

            axum::serve(listener, app).await.context("server error")?;
        }
    }

    Ok(())
}
