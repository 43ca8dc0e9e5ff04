//! The `list-device-types` subcommand — dump the registry as YAML.

use std::path::PathBuf;

use anyhow::Context;
use serde_yaml::{Mapping, Value};

use synthome_domain::document;

/// Arguments for `list-device-types`.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Limit to only one specific device type
    #[arg(long)]
    pub device_type: Option<String>,

    /// Read device type templates from this directory instead of the
    /// bundled registry
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Print the selected device types in their document form, keyed by id.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let registry = super::load_registry(args.registry.as_deref())?;

    let mut dump = Mapping::new();
    match &args.device_type {
        Some(id) => {
            let device_type = registry
                .get(id)
                .with_context(|| format!("unknown device type `{id}`"))?;
            dump.insert(
                Value::from(id.clone()),
                document::render_device_type(device_type),
            );
        }
        None => {
            for (id, device_type) in registry.device_types() {
                dump.insert(
                    Value::from(id.clone()),
                    document::render_device_type(device_type),
                );
            }
        }
    }
    print!("{}", serde_yaml::to_string(&Value::Mapping(dump))?);
    Ok(())
}
