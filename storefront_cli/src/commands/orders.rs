use anyhow::{bail, Context, Result};
use clap::Subcommand;
use storefront_lib::types::{ContactInfo, OrderLine, PlaceOrderRequest};
use storefront_lib::{AuthSession, CartSession, Client, PageQuery, StateStore};

use crate::output::{print_json, print_orders_table, OutputFormat};

#[derive(Subcommand)]
pub enum OrderCommand {
    /// Place an order from explicit line items
    Place {
        /// Contact name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
        /// Delivery address
        #[arg(long)]
        address: String,
        /// Line items as product-id:quantity pairs, e.g. --item 42:2
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        /// Delivery zone ID
        #[arg(long)]
        zone: Option<i64>,
        /// Clear the cart once the order is accepted
        #[arg(long)]
        clear_cart: bool,
    },
    /// Look up one order by ID
    Get { id: String },
    /// List the account's orders
    List {
        /// Page number (0-indexed)
        #[arg(long, default_value = "0")]
        page: i64,
        /// Results per page
        #[arg(long, default_value = "20")]
        size: i64,
    },
}

pub async fn run<S: StateStore>(
    command: &OrderCommand,
    client: &Client,
    store: S,
    format: &OutputFormat,
) -> Result<()> {
    // Re-arm the client with any saved token; order endpoints are
    // account-scoped.
    let _auth = AuthSession::new(client, &store);

    match command {
        OrderCommand::Place {
            name,
            email,
            phone,
            address,
            items,
            zone,
            clear_cart,
        } => {
            let lines = items
                .iter()
                .map(|raw| parse_line(raw))
                .collect::<Result<Vec<_>>>()?;
            let req = PlaceOrderRequest {
                contact: ContactInfo {
                    name: name.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    address: address.clone(),
                },
                items: lines,
                delivery_zone_id: *zone,
            };

            let order = client.place_order(&req).await?;
            eprintln!("Order {} accepted ({})", order.id, order.status);
            if *clear_cart {
                CartSession::new(client, &store).clear().await;
                eprintln!("Cart cleared.");
            }
            match format {
                OutputFormat::Table => print_orders_table(&[order]),
                OutputFormat::Json => print_json(&order)?,
            }
        }
        OrderCommand::Get { id } => {
            let order = client.get_order(id).await?;
            match format {
                OutputFormat::Table => print_orders_table(&[order]),
                OutputFormat::Json => print_json(&order)?,
            }
        }
        OrderCommand::List { page, size } => {
            let query = PageQuery::default().with_page(*page).with_size(*size);
            let resp = client.list_orders(&query).await?;
            match format {
                OutputFormat::Table => print_orders_table(&resp.content),
                OutputFormat::Json => print_json(&resp.content)?,
            }
        }
    }

    Ok(())
}

/// Parses a `product-id:quantity` pair.
fn parse_line(raw: &str) -> Result<OrderLine> {
    let Some((product, quantity)) = raw.split_once(':') else {
        bail!("invalid line item {:?}, expected product-id:quantity", raw);
    };
    let product_id = product
        .parse()
        .with_context(|| format!("invalid product id in {:?}", raw))?;
    let quantity: u32 = quantity
        .parse()
        .with_context(|| format!("invalid quantity in {:?}", raw))?;
    if quantity == 0 {
        bail!("quantity must be at least 1 in {:?}", raw);
    }
    Ok(OrderLine {
        product_id,
        quantity,
    })
}
