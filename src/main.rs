// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_api::StoreKind;
use recipe_api::server::{AppConfig, run_server};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-api")]
#[command(author, version, about = "Recipe management HTTP API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,
        /// Store backend: memory or sqlite (overrides storage.backend)
        #[arg(long)]
        backend: Option<StoreKind>,
        /// SQLite database path (overrides storage.path)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },
    /// Create or migrate the SQLite database
    Init {
        /// Database path
        #[arg(short, long, default_value = "recipes.db")]
        db_path: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            config,
            bind,
            backend,
            db_path,
        }) => {
            let mut app_config = match config {
                Some(path) => {
                    info!("Loading configuration from {}", path.display());
                    AppConfig::load(&path)?
                }
                None => AppConfig::default(),
            };

            if let Some(bind) = bind {
                app_config.server.bind = bind;
            }
            if let Some(backend) = backend {
                app_config.storage.backend = backend;
            }
            if let Some(db_path) = db_path {
                app_config.storage.path = db_path;
            }

            let server_config = app_config.to_server_config()?;
            info!(
                "Store backend: {} ({})",
                app_config.storage.backend,
                app_config.storage.path.display()
            );

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_server(server_config))
        }
        Some(Commands::Init { db_path }) => {
            info!("Initializing recipe database at: {}", db_path);
            recipe_api::db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path);
            Ok(())
        }
        None => {
            println!("Recipe API v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'recipe-api --help' for usage information");
            Ok(())
        }
    }
}
