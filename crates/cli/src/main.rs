//! Tagsmith CLI - session migrations, catalog listing and price quotes.
//!
//! # Usage
//!
//! ```bash
//! # Create the PostgreSQL session table used by the storefront
//! tagsmith migrate
//!
//! # List stock products
//! tagsmith catalog
//! tagsmith catalog --json
//!
//! # Price a custom tag
//! tagsmith quote --size 7.5 --material metal --quantity 4
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create or update the session store schema
//! - `catalog` - Print the stock catalog
//! - `quote` - Price a custom tag without touching any cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(author, version, about = "Tagsmith CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the `PostgreSQL` session table
    Migrate,
    /// List stock products
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Price a custom tag
    Quote {
        /// Longest dimension in centimetres
        #[arg(short, long)]
        size: String,

        /// Material (`paper`, `plastic`, `metal`; anything else is priced as paper)
        #[arg(short, long, default_value = "paper")]
        material: String,

        /// Number of tags
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagsmith_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::sessions().await?,
        Commands::Catalog { json } => commands::catalog::list(json)?,
        Commands::Quote {
            size,
            material,
            quantity,
        } => commands::quote::print(&size, &material, &quantity)?,
    }
    Ok(())
}
