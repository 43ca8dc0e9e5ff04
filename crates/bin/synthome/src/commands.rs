//! CLI subcommand implementations.

pub mod create_inventory;
pub mod list_device_types;

use std::path::Path;

use synthome_adapter_documents_yaml::DirectoryTemplateSource;
use synthome_adapter_registry_builtin::BuiltinTemplateSource;
use synthome_app::services::RegistryService;
use synthome_domain::device_type::DeviceTypeRegistry;

/// Load the device type registry, from `dir` when given, otherwise from
/// the bundled templates.
fn load_registry(dir: Option<&Path>) -> anyhow::Result<DeviceTypeRegistry> {
    let registry = match dir {
        Some(dir) => RegistryService::new(DirectoryTemplateSource::new(dir)).load_registry()?,
        None => RegistryService::new(BuiltinTemplateSource).load_registry()?,
    };
    tracing::debug!(device_types = registry.len(), "device type registry ready");
    Ok(registry)
}
