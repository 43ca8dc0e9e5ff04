//! Resolution of declared devices against the device type registry.
//!
//! Resolution turns each declared device into its effective form: the
//! selected device state merged over the type's default, and the type's
//! entity entries with pinned state attributes applied.

use crate::device::{Device, DeviceStateSelector};
use crate::device_type::{DeviceTypeRegistry, PlatformEntities};
use crate::document;
use crate::error::ResolutionError;
use crate::home::{AreaDevices, SyntheticHome};
use crate::state::{DeviceState, merge_entity_state_attributes};

/// The state selection after inline overlays have been parsed.
enum Selection {
    Default,
    Named(String),
    Own(DeviceState),
}

/// Resolve one declared device.
///
/// The effective state is, in order: the predefined state the device names;
/// or the device's own state (inline or already resolved) merged over the
/// type's default; or the type's default alone.
///
/// # Errors
///
/// Returns [`ResolutionError`] when the device type is unknown, a named
/// state does not exist, an inline overlay does not parse, or no state can
/// be determined because the type defines none.
pub fn resolve_device(
    device: &Device,
    registry: &DeviceTypeRegistry,
) -> Result<Device, ResolutionError> {
    let device_type =
        registry
            .get(&device.device_type)
            .ok_or_else(|| ResolutionError::UnknownDeviceType {
                device: device.name.clone(),
                device_type: device.device_type.clone(),
            })?;

    let selection = match &device.device_state {
        DeviceStateSelector::Unselected => Selection::Default,
        DeviceStateSelector::Named(name) => Selection::Named(name.clone()),
        DeviceStateSelector::Resolved(own) => Selection::Own(own.clone()),
        DeviceStateSelector::Inline(overlay) => Selection::Own(
            document::parse_device_state("custom", overlay).map_err(|source| {
                ResolutionError::InvalidInlineState {
                    device: device.name.clone(),
                    source,
                }
            })?,
        ),
    };

    let effective = match selection {
        Selection::Named(name) => {
            device_type
                .state(&name)
                .cloned()
                .ok_or_else(|| ResolutionError::UnknownState {
                    device: device.name.clone(),
                    device_type: device.device_type.clone(),
                    state: name.clone(),
                })?
        }
        Selection::Own(own) => device_type
            .default_state()
            .ok_or_else(|| ResolutionError::MissingState {
                device: device.name.clone(),
            })?
            .merge(&own),
        Selection::Default => {
            device_type
                .default_state()
                .cloned()
                .ok_or_else(|| ResolutionError::MissingState {
                    device: device.name.clone(),
                })?
        }
    };

    let entity_entries: Vec<PlatformEntities> = device_type
        .entities
        .iter()
        .map(|group| PlatformEntities {
            platform: group.platform.clone(),
            entries: group
                .entries
                .iter()
                .map(|entry| {
                    merge_entity_state_attributes(&group.platform, entry, &effective.entity_states)
                })
                .collect(),
        })
        .collect();

    Ok(device.merge(
        Some(DeviceStateSelector::Resolved(effective)),
        Some(entity_entries),
    ))
}

/// Resolve every device of a home, areas first, then services.
///
/// # Errors
///
/// Returns the first [`ResolutionError`] hit, in document order.
pub fn resolve_home(
    home: &SyntheticHome,
    registry: &DeviceTypeRegistry,
) -> Result<SyntheticHome, ResolutionError> {
    let areas = home
        .areas
        .iter()
        .map(|area| {
            let devices = area
                .devices
                .iter()
                .map(|device| resolve_device(device, registry))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AreaDevices {
                area: area.area.clone(),
                devices,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let services = home
        .services
        .iter()
        .map(|device| resolve_device(device, registry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SyntheticHome {
        name: home.name.clone(),
        areas,
        services,
    })
}
