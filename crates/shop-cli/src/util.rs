use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use shop_contracts::{CatalogEvent, Product};
use shop_store::{Store, StoreConfig};

use crate::opts::ShopOpts;

/// Load .env from `dir` without overriding existing environment variables.
pub fn load_dotenv(dir: &Path) -> Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        for item in dotenvy::from_path_iter(&env_path).context("load .env")? {
            let (key, val) = item?;
            if std::env::var_os(&key).is_none() {
                unsafe {
                    std::env::set_var(&key, &val);
                }
            }
        }
    }
    Ok(())
}

pub fn read_catalog(path: &Path) -> Result<Vec<Product>> {
    let bytes = fs::read(path).with_context(|| format!("read catalog {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse catalog {}", path.display()))
}

/// Store configured from the environment, preloaded with the catalog when one is given.
pub fn open_store(opts: &ShopOpts) -> Result<Store> {
    let mut store = Store::new(StoreConfig::from_env());
    if let Some(path) = &opts.catalog {
        let products = read_catalog(path)?;
        tracing::debug!(count = products.len(), path = %path.display(), "catalog loaded");
        store.dispatch(CatalogEvent::LoadProducts(products))?;
    }
    Ok(store)
}

/// Like [`open_store`] but fails when no catalog was supplied.
pub fn open_store_with_catalog(opts: &ShopOpts) -> Result<Store> {
    if opts.catalog.is_none() {
        return Err(anyhow!("no catalog given; pass --catalog or set SHOP_CATALOG"));
    }
    open_store(opts)
}

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}
