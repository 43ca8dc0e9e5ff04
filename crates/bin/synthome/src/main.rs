//! # synthome — synthetic home inventory compiler
//!
//! Composition root that wires the template and home sources to the
//! application services and prints the results.
//!
//! ## Responsibilities
//! - Parse CLI arguments and initialize logging
//! - Pick the template source (bundled registry or a directory on disk)
//! - Construct application services, injecting sources via port traits
//! - Print inventories and device type dumps as YAML documents on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Compile synthetic home definitions into flattened inventories.
#[derive(Parser, Debug)]
#[command(name = "synthome")]
#[command(about = "Compile synthetic home definitions into flattened inventories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the inventory for a home definition and print it as YAML
    CreateInventory(commands::create_inventory::Args),
    /// Print the device type registry, or a single type, as YAML
    ListDeviceTypes(commands::list_device_types::Args),
}

impl Cli {
    /// Initialize logging based on the debug flag.
    ///
    /// Logs go to stderr: stdout carries the YAML documents the commands
    /// print.
    fn initialize_logging(&self) {
        let filter = if self.debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.initialize_logging();

    match cli.command {
        Command::CreateInventory(args) => commands::create_inventory::run(&args),
        Command::ListDeviceTypes(args) => commands::list_device_types::run(&args),
    }
}
