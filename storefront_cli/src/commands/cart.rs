use anyhow::Result;
use clap::Subcommand;
use storefront_lib::{CartSession, Client, StateStore};

use crate::output::{format_cents, print_cart_table, print_json, OutputFormat};

#[derive(Subcommand)]
pub enum CartCommand {
    /// Fetch and display the active cart
    Show,
    /// Add a product to the cart, creating one if needed
    Add {
        /// Product ID
        #[arg(long)]
        product: i64,
        /// Number of units
        #[arg(long, default_value = "1")]
        quantity: u32,
    },
    /// Change the quantity of one cart line
    Update {
        /// Cart item ID
        #[arg(long)]
        item: String,
        /// New quantity
        #[arg(long)]
        quantity: u32,
    },
    /// Remove one cart line
    Remove {
        /// Cart item ID
        #[arg(long)]
        item: String,
    },
    /// Clear the cart locally and server-side
    Clear,
}

pub async fn run<S: StateStore>(
    command: &CartCommand,
    client: &Client,
    store: S,
    format: &OutputFormat,
) -> Result<()> {
    let mut session = CartSession::new(client, store);

    match command {
        CartCommand::Show => match session.fetch().await? {
            Some(cart) => match format {
                OutputFormat::Table => print_cart_table(cart),
                OutputFormat::Json => print_json(cart)?,
            },
            None => eprintln!("No active cart."),
        },
        CartCommand::Add { product, quantity } => {
            session.add_item(*product, *quantity).await?;
            summarize(&session);
        }
        CartCommand::Update { item, quantity } => {
            session.update_quantity(item, *quantity).await?;
            summarize(&session);
        }
        CartCommand::Remove { item } => {
            session.remove_item(item).await?;
            summarize(&session);
        }
        CartCommand::Clear => {
            session.clear().await;
            eprintln!("Cart cleared.");
        }
    }

    Ok(())
}

fn summarize<S: StateStore>(session: &CartSession<'_, S>) {
    eprintln!(
        "{} items, total {}",
        session.item_count(),
        format_cents(session.total_cents())
    );
}
