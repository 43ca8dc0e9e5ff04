//! Device types — reusable templates that describe the entities a kind of
//! device exposes and the predefined states it can be put into.

use std::collections::BTreeMap;

use serde_yaml::Mapping;

use crate::error::LoadError;
use crate::state::DeviceState;

/// One entity exposed by a device type, keyed within its platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityEntry {
    /// The entity key, unique within the platform, e.g. `motion`.
    pub key: String,

    /// Template attributes for the entity, in authored order.
    pub attributes: Mapping,
}

/// The entities a device type exposes on one platform, in authored order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformEntities {
    /// The platform name, e.g. `binary_sensor`.
    pub platform: String,

    /// The entity entries declared for this platform.
    pub entries: Vec<EntityEntry>,
}

/// A device type template, e.g. `camera` or `smart-lock`.
///
/// The declaration order of `device_states` matters: the first state is the
/// default applied to devices that do not select one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceType {
    /// The identifier devices reference, e.g. `smart-lock`.
    pub device_type: String,

    /// A human readable description of the device type.
    pub desc: String,

    /// Predefined device states, in declaration order.
    pub device_states: Vec<DeviceState>,

    /// Entities grouped by platform, in declaration order.
    pub entities: Vec<PlatformEntities>,
}

impl DeviceType {
    /// Create a builder for constructing a [`DeviceType`].
    #[must_use]
    pub fn builder() -> DeviceTypeBuilder {
        DeviceTypeBuilder::default()
    }

    /// Look up a predefined state by name.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&DeviceState> {
        self.device_states.iter().find(|state| state.name == name)
    }

    /// The default state: the first one declared, if any.
    #[must_use]
    pub fn default_state(&self) -> Option<&DeviceState> {
        self.device_states.first()
    }

    /// Look up an entity entry by platform and key.
    #[must_use]
    pub fn entity(&self, platform: &str, key: &str) -> Option<&EntityEntry> {
        self.entities
            .iter()
            .find(|group| group.platform == platform)?
            .entries
            .iter()
            .find(|entry| entry.key == key)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DanglingStateReference`] when a predefined state
    /// pins an entity the device type does not declare.
    pub fn validate(&self) -> Result<(), LoadError> {
        for device_state in &self.device_states {
            for entity_state in &device_state.entity_states {
                if self
                    .entity(&entity_state.platform, &entity_state.key)
                    .is_none()
                {
                    return Err(LoadError::DanglingStateReference {
                        device_type: self.device_type.clone(),
                        state: device_state.name.clone(),
                        reference: entity_state.platform_key(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`DeviceType`].
#[derive(Debug, Default)]
pub struct DeviceTypeBuilder {
    device_type: Option<String>,
    desc: Option<String>,
    device_states: Vec<DeviceState>,
    entities: Vec<PlatformEntities>,
}

impl DeviceTypeBuilder {
    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Append one predefined state; the first appended becomes the default.
    #[must_use]
    pub fn device_state(mut self, device_state: DeviceState) -> Self {
        self.device_states.push(device_state);
        self
    }

    #[must_use]
    pub fn device_states(mut self, device_states: Vec<DeviceState>) -> Self {
        self.device_states = device_states;
        self
    }

    /// Append an entity entry to its platform group, creating the group at
    /// the end when it does not exist yet.
    #[must_use]
    pub fn entity(mut self, platform: impl Into<String>, entry: EntityEntry) -> Self {
        let platform = platform.into();
        match self
            .entities
            .iter_mut()
            .find(|group| group.platform == platform)
        {
            Some(group) => group.entries.push(entry),
            None => self.entities.push(PlatformEntities {
                platform,
                entries: vec![entry],
            }),
        }
        self
    }

    #[must_use]
    pub fn entities(mut self, entities: Vec<PlatformEntities>) -> Self {
        self.entities = entities;
        self
    }

    /// Consume the builder, validate, and return a [`DeviceType`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingField`] if `device_type` or `desc` was
    /// never provided, and [`LoadError::DanglingStateReference`] when a
    /// predefined state pins an undeclared entity.
    pub fn build(self) -> Result<DeviceType, LoadError> {
        let device_type = self.device_type.ok_or(LoadError::MissingField {
            field: "device_type",
            context: "device type".to_string(),
        })?;
        let desc = self.desc.ok_or_else(|| LoadError::MissingField {
            field: "desc",
            context: format!("device type `{device_type}`"),
        })?;
        let device_type = DeviceType {
            device_type,
            desc,
            device_states: self.device_states,
            entities: self.entities,
        };
        device_type.validate()?;
        Ok(device_type)
    }
}

/// The registry of all known device types, keyed by identifier.
///
/// Iteration over [`DeviceTypeRegistry::device_types`] is sorted by
/// identifier, so registry listings are deterministic regardless of the
/// order templates were loaded in.
#[derive(Debug, Clone, Default)]
pub struct DeviceTypeRegistry {
    device_types: BTreeMap<String, DeviceType>,
}

impl DeviceTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device type.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateDeviceType`] when the identifier is
    /// already registered.
    pub fn insert(&mut self, device_type: DeviceType) -> Result<(), LoadError> {
        if self.device_types.contains_key(&device_type.device_type) {
            return Err(LoadError::DuplicateDeviceType {
                device_type: device_type.device_type,
            });
        }
        self.device_types
            .insert(device_type.device_type.clone(), device_type);
        Ok(())
    }

    /// Look up a device type by identifier.
    #[must_use]
    pub fn get(&self, device_type: &str) -> Option<&DeviceType> {
        self.device_types.get(device_type)
    }

    /// All registered device types, sorted by identifier.
    #[must_use]
    pub fn device_types(&self) -> &BTreeMap<String, DeviceType> {
        &self.device_types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.device_types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device_types.is_empty()
    }
}
