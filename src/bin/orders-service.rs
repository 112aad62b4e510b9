//! orders-service CLI - serve the order listing API or apply schema migrations

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use orders_service::storage::migrations;
use orders_service::{
    telemetry, AppState, Database, DieselOrderRepository, InMemoryOrderRepository, ServiceConfig,
};

#[derive(Parser)]
#[command(name = "orders-service")]
#[command(
    version,
    about = "Read-only HTTP API listing orders and their statuses",
    long_about = None
)]
struct Cli {
    /// Optional YAML config file (environment variables and flags take precedence)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        #[command(flatten)]
        overrides: Overrides,

        /// Serve built-in sample orders instead of connecting to a database
        #[arg(long)]
        demo: bool,
    },

    /// Apply pending schema migrations and exit
    Migrate {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(Args, Default)]
struct Overrides {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// PostgreSQL connection string
    #[arg(short, long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    telemetry::init("info");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        overrides: Overrides::default(),
        demo: false,
    });

    if let Err(e) = run(cli.config, command).await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(
    config_path: Option<PathBuf>,
    command: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServiceConfig::load(config_path.as_deref())?;

    match command {
        Commands::Serve { overrides, demo } => {
            config.apply_overrides(overrides.host, overrides.port, overrides.database_url);

            let state = if demo {
                tracing::info!("Serving built-in sample orders (no database)");
                AppState::new(InMemoryOrderRepository::demo())
            } else {
                let db = Database::connect_lazy(config.database_url()?, &config.database);
                AppState::new(DieselOrderRepository::new(db))
            };

            orders_service::server::serve(&config, state).await
        }
        Commands::Migrate { overrides } => {
            config.apply_overrides(overrides.host, overrides.port, overrides.database_url);

            let db = Database::connect(config.database_url()?, &config.database)?;
            let applied = tokio::task::spawn_blocking(move || migrations::migrate(&db))
                .await??;
            println!("Applied {} migration(s)", applied.len());
            Ok(())
        }
    }
}
