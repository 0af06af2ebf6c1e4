use anyhow::Result;
use storefront_lib::Client;

use crate::output::{print_categories_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let categories = client.list_categories().await?;
    match format {
        OutputFormat::Table => print_categories_table(&categories),
        OutputFormat::Json => print_json(&categories)?,
    }
    Ok(())
}
