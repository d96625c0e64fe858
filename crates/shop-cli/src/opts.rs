//! Global CLI options.

use std::path::PathBuf;

use clap::Args;

/// Options shared by every command. The catalog path can come from the environment.
#[derive(Args, Debug, Clone)]
pub struct ShopOpts {
    /// Catalog file: JSON array of products (env: SHOP_CATALOG)
    #[arg(short = 'c', long, global = true, env = "SHOP_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// JSON output envelope
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Suppress notices
    #[arg(long, global = true)]
    pub quiet: bool,
}

impl ShopOpts {
    pub fn wants_json(&self) -> bool {
        self.json || self.pretty
    }
}
