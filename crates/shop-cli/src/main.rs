mod commands;
mod opts;
mod output;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::browse::BrowseArgs;
use commands::replay::ReplayArgs;
use opts::ShopOpts;

#[derive(Parser, Debug)]
#[command(name = "shop", version, about = "Storefront state CLI")]
struct Cli {
    #[command(flatten)]
    opts: ShopOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog products after search and category filters
    Browse(BrowseArgs),

    /// List catalog categories ("all" first)
    Categories,

    /// Apply a script of store actions and print the resulting state
    Replay(ReplayArgs),
}

fn main() -> Result<()> {
    let cwd = std::env::current_dir()?;
    util::load_dotenv(&cwd)?;
    setup_logging();

    let cli = Cli::parse();
    let opts = &cli.opts;

    match cli.command {
        Command::Browse(args) => commands::browse::cmd_browse(opts, &args),
        Command::Categories => commands::categories::cmd_categories(opts),
        Command::Replay(args) => commands::replay::cmd_replay(opts, &args),
    }
}

/// Logs go to stderr; level comes from `SHOP_LOG` (default `warn`).
fn setup_logging() {
    let filter = EnvFilter::try_from_env("SHOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();
}
