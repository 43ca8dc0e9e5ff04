//! The flattened inventory — areas, devices, and entities as consumed by
//! fixtures and evaluations.
//!
//! Field order of these records is load-bearing: it is the order keys are
//! written in when an inventory is encoded to YAML.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::device::DeviceInfo;
use crate::error::LoadError;
use crate::slug::slugify;

/// An area of the home, e.g. a room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// The human readable name, e.g. `Living Room`.
    pub name: String,

    /// The identifier, unique within a home, e.g. `living_room`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The human readable floor name, e.g. `Ground`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
}

impl Area {
    /// Create an area with its id derived from the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = Some(slugify(&name));
        Self {
            name,
            id,
            floor: None,
        }
    }
}

/// A device of the home, optionally placed in an area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// The human readable name, e.g. `Left Blind`.
    pub name: String,

    /// The identifier, unique within a home, e.g. `living_room_left_blind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The id of the area containing the device, e.g. `living_room`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// Make and model information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<DeviceInfo>,
}

impl Device {
    /// Create a device with its id derived from the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = Some(slugify(&name));
        Self {
            name,
            id,
            area: None,
            info: None,
        }
    }
}

/// An entity of the home, usually belonging to a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The human readable name, e.g. `Outside rain sensor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The identifier, unique within a home, e.g. `sensor.rain_intensity`.
    /// Mandatory; [`Inventory::normalize`] rejects entities without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The id of the area containing the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// The id of the device exposing the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// The current state value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,

    /// The current state attributes, in authored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Mapping>,
}

/// A whole home flattened into areas, devices, and entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// The default system language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The areas of the home.
    #[serde(default)]
    pub areas: Vec<Area>,

    /// The devices of the home.
    #[serde(default)]
    pub devices: Vec<Device>,

    /// The entities of the home.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Inventory {
    /// Fill derived identifiers and check mandatory ones.
    ///
    /// Areas and devices without an id get one derived from their name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EntityMissingId`] for an entity without an id.
    pub fn normalize(&mut self) -> Result<(), LoadError> {
        for area in &mut self.areas {
            if area.id.is_none() {
                area.id = Some(slugify(&area.name));
            }
        }
        for device in &mut self.devices {
            if device.id.is_none() {
                device.id = Some(slugify(&device.name));
            }
        }
        for entity in &mut self.entities {
            if entity.id.is_none() {
                return Err(LoadError::EntityMissingId {
                    entity: entity.name.clone().unwrap_or_default(),
                });
            }
        }
        Ok(())
    }

    /// The distinct floor names used by areas.
    #[must_use]
    pub fn floors(&self) -> BTreeSet<String> {
        self.areas
            .iter()
            .filter_map(|area| area.floor.clone())
            .collect()
    }
}
