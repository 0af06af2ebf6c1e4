use anyhow::Result;
use clap::Args;
use storefront_lib::{Client, PageQuery};

use crate::output::{print_json, print_products_table, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    /// Get a single product by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Restrict to one shop's products
    #[arg(long)]
    pub shop: Option<i64>,

    /// Restrict to one category
    #[arg(long)]
    pub category: Option<i64>,

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

pub async fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let product = client.get_product(id).await?;
        match format {
            OutputFormat::Table => print_products_table(&[product]),
            OutputFormat::Json => print_json(&product)?,
        }
        return Ok(());
    }

    let mut query = PageQuery::default().with_page(args.page).with_size(args.size);
    if let Some(search) = &args.search {
        query = query.with_search(search);
    }

    let page = match (args.shop, args.category) {
        (Some(shop), _) => client.products_by_shop(shop, &query).await?,
        (None, Some(category)) => client.products_by_category(category, &query).await?,
        (None, None) => client.list_products(&query).await?,
    };

    if let Some(total) = page.total_elements {
        eprintln!(
            "Page {}/{} ({} total products)",
            args.page,
            page.total_pages.unwrap_or(1),
            total
        );
    }

    match format {
        OutputFormat::Table => print_products_table(&page.content),
        OutputFormat::Json => print_json(&page.content)?,
    }

    Ok(())
}
