//! The synthetic home — areas and home-wide services with their declared
//! devices.

use crate::device::Device;

/// The devices declared for one named area, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaDevices {
    /// The human readable area name, e.g. `Family Room`.
    pub area: String,

    /// The devices placed in this area.
    pub devices: Vec<Device>,
}

/// A whole home declaration: areas in document order, plus services that
/// belong to the home rather than to any area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntheticHome {
    /// An optional human readable name for the home.
    pub name: Option<String>,

    /// Devices grouped by area, in document order.
    pub areas: Vec<AreaDevices>,

    /// Home-wide devices without an area (e.g. a weather service).
    pub services: Vec<Device>,
}

impl SyntheticHome {
    /// Total number of declared devices, services included.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.areas.iter().map(|area| area.devices.len()).sum::<usize>() + self.services.len()
    }

    /// True when the home declares no devices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device_count() == 0
    }
}
