//! leetsync — mirror accepted LeetCode solutions into a git repository.
//!
//! # Usage
//!
//! ```text
//! leetsync init --username <name> [--save-dir <dir>] [--limit <n>] [--force]
//! leetsync sync [--username <name>] [--save-dir <dir>] [--limit <n>] [--dry-run] [--no-publish]
//! leetsync list [--username <name>] [--limit <n>] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{init::InitArgs, list::ListArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "leetsync",
    version,
    about = "Sync accepted LeetCode solutions into a local git repository",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write ~/.leetsync/config.yaml.
    Init(InitArgs),

    /// Fetch accepted submissions, write snippets, then commit and push.
    Sync(SyncArgs),

    /// Show recent accepted submissions without writing anything.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
