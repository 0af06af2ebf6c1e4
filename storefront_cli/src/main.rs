mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_lib::{Client, FileStore};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront, manage a cart, and place orders")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse or look up products
    Products(commands::products::ProductsArgs),
    /// Browse or look up shops
    Shops(commands::shops::ShopsArgs),
    /// List product categories
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        command: commands::cart::CartCommand,
    },
    /// Place and inspect orders
    Orders {
        #[command(subcommand)]
        command: commands::orders::OrderCommand,
    },
    /// Log in, register, and inspect the account
    Account {
        #[command(subcommand)]
        command: commands::account::AccountCommand,
    },
    /// List delivery zones available at checkout
    Zones,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::from_env()?;
    let store = FileStore::open(state_file_path())?;

    match &cli.command {
        Commands::Products(args) => commands::products::run(args, &client, &format).await?,
        Commands::Shops(args) => commands::shops::run(args, &client, &format).await?,
        Commands::Categories => commands::categories::run(&client, &format).await?,
        Commands::Cart { command } => commands::cart::run(command, &client, &store, &format).await?,
        Commands::Orders { command } => {
            commands::orders::run(command, &client, &store, &format).await?
        }
        Commands::Account { command } => {
            commands::account::run(command, &client, &store, &format).await?
        }
        Commands::Zones => commands::zones::run(&client, &format).await?,
    }

    Ok(())
}

fn state_file_path() -> PathBuf {
    std::env::var("STOREFRONT_STATE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".storefront/state.json"))
}
