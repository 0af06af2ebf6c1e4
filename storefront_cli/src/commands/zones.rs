use anyhow::Result;
use storefront_lib::Client;

use crate::output::{print_json, print_zones_table, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let zones = client.client_delivery_zones().await?;
    match format {
        OutputFormat::Table => print_zones_table(&zones),
        OutputFormat::Json => print_json(&zones)?,
    }
    Ok(())
}
