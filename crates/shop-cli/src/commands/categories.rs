//! `shop categories` command.

use anyhow::Result;

use crate::opts::ShopOpts;
use crate::output::print_success;
use crate::util::open_store_with_catalog;

pub fn cmd_categories(opts: &ShopOpts) -> Result<()> {
    let store = open_store_with_catalog(opts)?;
    let categories = store.catalog().categories();
    if opts.wants_json() {
        print_success(opts, serde_json::to_value(categories)?, Vec::new())
    } else {
        print_success(opts, categories.join("\n").into(), Vec::new())
    }
}
