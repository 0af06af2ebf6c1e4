use anyhow::Result;
use clap::Args;
use storefront_lib::{Client, PageQuery};

use crate::output::{print_json, print_shops_table, OutputFormat};

#[derive(Args)]
pub struct ShopsArgs {
    /// Get a single shop by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Page number (0-indexed)
    #[arg(long, default_value = "0")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub size: i64,
}

pub async fn run(args: &ShopsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let shop = client.get_shop(id).await?;
        match format {
            OutputFormat::Table => print_shops_table(&[shop]),
            OutputFormat::Json => print_json(&shop)?,
        }
        return Ok(());
    }

    let mut query = PageQuery::default().with_page(args.page).with_size(args.size);
    if let Some(search) = &args.search {
        query = query.with_search(search);
    }

    let page = client.list_shops(&query).await?;

    match format {
        OutputFormat::Table => print_shops_table(&page.content),
        OutputFormat::Json => print_json(&page.content)?,
    }

    Ok(())
}
