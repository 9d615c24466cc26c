//! Library Search Tool — a hierarchical tagged-tree index and masked
//! substring search over a music library, with a small GUI shell.

use clap::Parser;
use iced::application;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod add_coordinator;
mod config;
mod error;
mod fold;
mod fslibrary;
mod index;
mod label;
mod model;
mod playlist;
mod query;
#[cfg(test)]
mod test_utils;
mod ui;

use ui::SearchTool;

/// CLI surface trimmed to the flags this crate needs; anything beyond
/// these launches the GUI (matching the teacher's "try a CLI command,
/// else launch GUI" `main()` shape).
#[derive(Parser, Debug)]
#[command(name = "search-tool", version, about = "Library search tool")]
struct Cli {
    /// Library root to scan; overrides the configured path for this run.
    #[arg(long)]
    path: Option<std::path::PathBuf>,

    /// Rescan the library once, print the count, and exit without
    /// launching the GUI.
    #[arg(long)]
    rescan: bool,

    /// Cap on displayed rows, overriding the configured default.
    #[arg(long)]
    max_results: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("search_tool=info".parse().unwrap()))
        .init();

    if args.rescan {
        return run_headless_rescan(args);
    }

    application("Library Search Tool", SearchTool::update, SearchTool::view)
        .subscription(SearchTool::subscription)
        .run_with(SearchTool::new)
        .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}

/// `--rescan`: walk the library, print how many tracks were found, and
/// exit. Lets the core be exercised from scripts/CI without a display.
fn run_headless_rescan(args: Cli) -> anyhow::Result<()> {
    let mut cfg = config::load();
    if let Some(path) = args.path {
        cfg.path = Some(path);
    }
    if let Some(max_results) = args.max_results {
        cfg.max_results = max_results;
    }

    let path = cfg
        .path
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no library path configured; pass --path"))?;

    let runtime = tokio::runtime::Runtime::new()?;
    let scanned = runtime.block_on(fslibrary::scan_tagged(path));
    println!("{} track(s) found", scanned.len());

    config::save(&cfg)?;
    Ok(())
}
