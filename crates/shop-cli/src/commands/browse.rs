//! `shop browse` command.

use anyhow::Result;
use clap::Args;
use shop_contracts::{CatalogEvent, Product};

use crate::opts::ShopOpts;
use crate::output::print_success;
use crate::util::{format_price, open_store_with_catalog};

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against name and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to show ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Only featured products
    #[arg(long)]
    pub featured: bool,
}

pub fn cmd_browse(opts: &ShopOpts, args: &BrowseArgs) -> Result<()> {
    let mut store = open_store_with_catalog(opts)?;
    if let Some(query) = &args.search {
        store.dispatch(CatalogEvent::SetSearchQuery(query.clone()))?;
    }
    if let Some(category) = &args.category {
        store.dispatch(CatalogEvent::SetSelectedCategory(category.clone()))?;
    }

    let catalog = store.catalog();
    let products: Vec<&Product> = if args.featured {
        catalog.featured_products().collect()
    } else {
        catalog.visible_products().collect()
    };

    let mut warnings = Vec::new();
    if products.is_empty() {
        warnings.push("no products match the current filters".to_string());
    }

    if opts.wants_json() {
        return print_success(opts, serde_json::to_value(&products)?, warnings);
    }
    let lines: Vec<String> = products.iter().map(|p| product_line(p)).collect();
    print_success(opts, lines.join("\n").into(), warnings)
}

fn product_line(product: &Product) -> String {
    let mut line = format!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.category,
        format_price(product.price)
    );
    if let Some(pct) = product.discount_percent() {
        line.push_str(&format!("\t{pct}% OFF"));
    }
    if !product.in_stock {
        line.push_str("\tout of stock");
    }
    line
}
