//! Home service — use-cases for loading homes and building inventories.

use synthome_domain::builder;
use synthome_domain::device_type::DeviceTypeRegistry;
use synthome_domain::document;
use synthome_domain::error::SynthomeError;
use synthome_domain::home::SyntheticHome;
use synthome_domain::inventory::Inventory;
use synthome_domain::resolver;

use crate::ports::HomeSource;

/// Application service turning a home document into resolved devices and
/// a flattened inventory, against a previously loaded registry.
pub struct HomeService<H> {
    source: H,
    registry: DeviceTypeRegistry,
}

impl<H: HomeSource> HomeService<H> {
    /// Create a new service backed by the given home source and registry.
    pub fn new(source: H, registry: DeviceTypeRegistry) -> Self {
        Self { source, registry }
    }

    /// Load the home document and resolve every device it declares.
    ///
    /// # Errors
    ///
    /// Returns [`SynthomeError::Encoding`] when the source cannot be read,
    /// [`SynthomeError::Load`] when the document is malformed, and
    /// [`SynthomeError::Resolution`] when a device cannot be resolved
    /// against the registry.
    #[tracing::instrument(skip(self))]
    pub fn load_home(&self) -> Result<SyntheticHome, SynthomeError> {
        let document = self.source.load()?;
        let home = document::parse_home(&document)?;
        tracing::debug!(devices = home.device_count(), "resolving home");
        let resolved = resolver::resolve_home(&home, &self.registry)?;
        Ok(resolved)
    }

    /// Load, resolve, and flatten the home into an inventory.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`HomeService::load_home`]; the flattening
    /// itself cannot fail once resolution succeeded.
    #[tracing::instrument(skip(self))]
    pub fn build_inventory(&self) -> Result<Inventory, SynthomeError> {
        let home = self.load_home()?;
        let mut inventory = builder::build_inventory(&home);
        inventory.normalize()?;
        tracing::debug!(
            areas = inventory.areas.len(),
            devices = inventory.devices.len(),
            entities = inventory.entities.len(),
            "inventory built"
        );
        Ok(inventory)
    }

    /// The registry this service resolves against.
    #[must_use]
    pub fn registry(&self) -> &DeviceTypeRegistry {
        &self.registry
    }
}
