//! Declared devices — the instances a home document places in areas and
//! services, before and after resolution against the registry.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::device_type::PlatformEntities;
use crate::state::DeviceState;

/// Make and model information attached to a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// The model name, e.g. `Learning Thermostat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// The manufacturer, e.g. `Nest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// The firmware version string, e.g. `1.0.2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
}

impl DeviceInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.manufacturer.is_none() && self.sw_version.is_none()
    }
}

/// How a declared device selects its state, and what resolution turned the
/// selection into.
///
/// A home document either names a predefined state, spells one out inline
/// as an attribute overlay, or stays silent and gets the device type's
/// default. Resolution replaces all three with [`Resolved`].
///
/// [`Resolved`]: DeviceStateSelector::Resolved
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeviceStateSelector {
    /// No state declared; resolution falls back to the default state.
    #[default]
    Unselected,

    /// A predefined state referenced by name.
    Named(String),

    /// An inline overlay of `<platform>.<key>` entries, parsed during
    /// resolution as a one-off state.
    Inline(Mapping),

    /// The effective state produced by resolution.
    Resolved(DeviceState),
}

/// A device declared by a home document.
///
/// Before resolution, `entity_entries` is empty and `device_state` carries
/// whatever the document selected. After [`resolve_device`] both hold the
/// effective values derived from the device type.
///
/// [`resolve_device`]: crate::resolver::resolve_device
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// A human readable name, e.g. `Family Room Lamp`.
    pub name: String,

    /// The device type identifier this device instantiates.
    pub device_type: String,

    /// Optional make and model information.
    pub device_info: Option<DeviceInfo>,

    /// The declared state selection, or the resolved state.
    pub device_state: DeviceStateSelector,

    /// The entity entries derived from the device type, with state
    /// attributes applied. Empty until resolution.
    pub entity_entries: Vec<PlatformEntities>,
}

impl Device {
    /// Create a fresh, unresolved declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_type: device_type.into(),
            device_info: None,
            device_state: DeviceStateSelector::Unselected,
            entity_entries: Vec::new(),
        }
    }

    /// Copy this device, replacing the state selection and entity entries
    /// where new values are given.
    #[must_use]
    pub fn merge(
        &self,
        device_state: Option<DeviceStateSelector>,
        entity_entries: Option<Vec<PlatformEntities>>,
    ) -> Self {
        Self {
            name: self.name.clone(),
            device_type: self.device_type.clone(),
            device_info: self.device_info.clone(),
            device_state: device_state.unwrap_or_else(|| self.device_state.clone()),
            entity_entries: entity_entries.unwrap_or_else(|| self.entity_entries.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;
    use crate::state::EntityState;

    #[test]
    fn should_default_to_unselected_state() {
        let device = Device::new("Family Room Lamp", "light");
        assert_eq!(device.device_state, DeviceStateSelector::Unselected);
        assert!(device.entity_entries.is_empty());
    }

    #[test]
    fn should_keep_existing_fields_when_merge_receives_none() {
        let mut device = Device::new("Left Window", "window-sensor");
        device.device_state = DeviceStateSelector::Named("opened".to_string());

        let merged = device.merge(None, None);

        assert_eq!(merged, device);
    }

    #[test]
    fn should_replace_state_and_entries_when_merge_receives_values() {
        let device = Device::new("Left Window", "window-sensor");
        let resolved = DeviceState {
            name: "opened".to_string(),
            entity_states: vec![EntityState {
                platform: "binary_sensor".to_string(),
                key: "window".to_string(),
                state: Value::from(true),
            }],
        };

        let merged = device.merge(
            Some(DeviceStateSelector::Resolved(resolved.clone())),
            Some(Vec::new()),
        );

        assert_eq!(
            merged.device_state,
            DeviceStateSelector::Resolved(resolved)
        );
        assert_eq!(merged.name, device.name);
    }

    #[test]
    fn should_report_empty_device_info() {
        assert!(DeviceInfo::default().is_empty());
        let info = DeviceInfo {
            manufacturer: Some("Ring".to_string()),
            ..DeviceInfo::default()
        };
        assert!(!info.is_empty());
    }
}
