//! Development tasks for inventory save files
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{PackInventory, ReadInventory};

/// Development tasks for inventory save files
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for inventory saves", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Read and inspect a saved inventory
    ReadInventory(ReadInventory),

    /// Build a saved inventory from a JSON item list
    PackInventory(PackInventory),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ReadInventory(cmd) => cmd.execute(),
        Command::PackInventory(cmd) => cmd.execute(),
    }
}
