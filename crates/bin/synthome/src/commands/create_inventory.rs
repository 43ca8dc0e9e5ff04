//! The `create-inventory` subcommand — home definition in, inventory out.

use std::path::PathBuf;

use anyhow::Context;

use synthome_adapter_documents_yaml::{YamlHomeSource, encode_inventory};
use synthome_app::services::HomeService;

/// Arguments for `create-inventory`.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// The synthetic home config file
    pub config_file: PathBuf,

    /// Read device type templates from this directory instead of the
    /// bundled registry
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Build the inventory for the given home definition and print it.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let registry = super::load_registry(args.registry.as_deref())?;
    let service = HomeService::new(YamlHomeSource::new(&args.config_file), registry);
    let inventory = service.build_inventory().with_context(|| {
        format!(
            "failed to build an inventory for {}",
            args.config_file.display()
        )
    })?;
    print!("{}", encode_inventory(&inventory)?);
    Ok(())
}
