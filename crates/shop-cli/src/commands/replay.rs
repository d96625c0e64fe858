//! `shop replay` command: apply a scripted list of actions and print the result.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shop_contracts::StoreAction;

use crate::opts::ShopOpts;
use crate::output::print_success;
use crate::util::{format_price, open_store};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Script file: JSON array of store actions
    pub script: PathBuf,

    /// Keep going after a failed action instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

pub fn cmd_replay(opts: &ShopOpts, args: &ReplayArgs) -> Result<()> {
    let bytes = fs::read(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let actions: Vec<StoreAction> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse script {}", args.script.display()))?;

    let mut store = open_store(opts)?;
    let mut warnings = Vec::new();
    for (idx, action) in actions.into_iter().enumerate() {
        let slice = action.slice();
        if let Err(err) = store.dispatch(action) {
            if !args.keep_going {
                return Err(err).with_context(|| format!("action #{idx} ({slice})"));
            }
            warnings.push(format!("action #{idx} ({slice}) failed: {err}"));
        }
    }

    let snapshot = store.snapshot();
    if opts.wants_json() {
        return print_success(opts, serde_json::to_value(&snapshot)?, warnings);
    }

    let mut out = vec![
        format!(
            "catalog: {} of {} products visible",
            snapshot.catalog.visible_products.len(),
            snapshot.catalog.total_products
        ),
        format!(
            "cart: {} item(s), subtotal {}, total {}",
            snapshot.cart.item_count,
            format_price(snapshot.cart.summary.subtotal),
            format_price(snapshot.cart.summary.total)
        ),
        format!("wishlist: {} item(s)", snapshot.wishlist.len()),
        format!("orders: {}", snapshot.orders.counts.all),
    ];
    for order in &snapshot.orders.orders {
        out.push(format!(
            "  {}\t{}\t{}",
            order.id,
            order.status,
            format_price(order.total)
        ));
    }
    print_success(opts, out.join("\n").into(), warnings)
}
