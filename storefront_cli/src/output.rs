use anyhow::Result;
use serde::Serialize;
use storefront_lib::types::{Cart, Category, DeliveryZone, Order, Product, Profile, Shop};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "Rating")]
    rating: String,
}

#[derive(Tabled)]
struct ShopRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Placed")]
    placed: String,
}

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Fee")]
    fee: String,
}

// -- Row builders --

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            name: p.name.clone(),
            price: format_cents(p.price_cents),
            stock: p.stock,
            rating: p
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_shop_rows(shops: &[Shop]) -> Vec<ShopRow> {
    shops
        .iter()
        .map(|s| ShopRow {
            id: s.id,
            name: s.name.clone(),
            description: s.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_cart_rows(cart: &Cart) -> Vec<CartRow> {
    cart.items
        .iter()
        .map(|item| CartRow {
            item: item.id.clone(),
            product: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: format_cents(item.product.price_cents),
            line_total: format_cents(item.product.price_cents * i64::from(item.quantity)),
        })
        .collect()
}

fn build_order_rows(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id.clone(),
            status: o.status.clone(),
            total: o
                .total_cents
                .map(format_cents)
                .unwrap_or_else(|| "-".to_string()),
            placed: o
                .placed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect()
}

// -- Printers --

pub fn print_products_table(products: &[Product]) {
    print_table(build_product_rows(products));
}

pub fn print_shops_table(shops: &[Shop]) {
    print_table(build_shop_rows(shops));
}

pub fn print_categories_table(categories: &[Category]) {
    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
        })
        .collect();
    print_table(rows);
}

pub fn print_cart_table(cart: &Cart) {
    print_table(build_cart_rows(cart));
    eprintln!(
        "Cart {}: {} items, total {}",
        cart.id,
        cart.item_count(),
        format_cents(cart.total_cents())
    );
}

pub fn print_orders_table(orders: &[Order]) {
    print_table(build_order_rows(orders));
}

pub fn print_zones_table(zones: &[DeliveryZone]) {
    let rows: Vec<ZoneRow> = zones
        .iter()
        .map(|z| ZoneRow {
            id: z.id,
            name: z.name.clone(),
            fee: format_cents(z.fee_cents),
        })
        .collect();
    print_table(rows);
}

pub fn print_profile(profile: &Profile) {
    println!("{} <{}>", profile.name, profile.email);
    if let Some(phone) = &profile.phone {
        println!("phone: {}", phone);
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        eprintln!("No results.");
        return;
    }
    println!("{}", Table::new(rows).with(Style::psql()));
}

/// Renders minor currency units as a decimal string.
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}
