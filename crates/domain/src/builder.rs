//! Flattening a resolved home into an inventory of areas, devices, and
//! entities with stable derived identifiers.

use std::collections::HashSet;

use crate::device::Device;
use crate::home::SyntheticHome;
use crate::inventory::{self, Inventory};
use crate::slug::slugify;
use crate::value;

/// Prefix used to disambiguate colliding device names among services,
/// which have no area name to borrow.
const SERVICE_PREFIX: &str = "service";

/// Flatten a resolved home into an inventory.
///
/// Areas are emitted in document order, followed by a pseudo-group holding
/// the home-wide services. Device ids are unique across the whole home: a
/// device whose id is already taken is renamed with its area name (or
/// [`SERVICE_PREFIX`]) prepended, and that renamed form also feeds the
/// naming of its entities.
#[must_use]
pub fn build_inventory(home: &SyntheticHome) -> Inventory {
    let mut result = Inventory::default();
    let mut device_ids: HashSet<String> = HashSet::new();
    let mut entities = Vec::new();

    let mut groups: Vec<(Option<&str>, &[Device])> = home
        .areas
        .iter()
        .map(|area| (Some(area.area.as_str()), area.devices.as_slice()))
        .collect();
    if !home.services.is_empty() {
        groups.push((None, home.services.as_slice()));
    }

    for (area_name, devices) in groups {
        let area_id = area_name.map(slugify);
        if let Some(name) = area_name {
            result.areas.push(inventory::Area::new(name));
        }

        for device in devices {
            let mut raw_name = device.name.clone();
            let mut device_id = slugify(&raw_name);
            if device_ids.contains(&device_id) {
                let prefix = area_name.unwrap_or(SERVICE_PREFIX);
                raw_name = format!("{prefix}_{raw_name}");
                device_id = slugify(&raw_name);
            }
            device_ids.insert(device_id.clone());

            // Make computer generated device names more friendly.
            result.devices.push(inventory::Device {
                name: display_name(&raw_name),
                id: Some(device_id),
                area: area_id.clone(),
                info: device.device_info.clone(),
            });
            entities.extend(build_entities(area_id.as_deref(), device, &raw_name));
        }
    }

    result.entities = entities;
    result
}

/// Build the entities for one device, deriving their names and ids from
/// the (possibly disambiguated) raw device name.
fn build_entities(area_id: Option<&str>, device: &Device, raw_name: &str) -> Vec<inventory::Entity> {
    let device_name = display_name(raw_name);
    let device_id = slugify(raw_name);
    let raw_lower = raw_name.to_lowercase();

    let mut entities = Vec::new();
    for group in &device.entity_entries {
        for entry in &group.entries {
            // Each entity needs a distinct name, but when the key already
            // appears in the device name the device name alone is kept, to
            // avoid names like "Motion Motion".
            let name = if group.platform == "sensor"
                || (group.platform == "binary_sensor" && !raw_lower.contains(entry.key.as_str()))
            {
                format!("{device_name} {}", capitalize(&entry.key))
            } else {
                device_name.clone()
            };
            let id = format!("{}.{}", group.platform, slugify(&name));

            let mut attributes = entry.attributes.clone();
            let state = value::take(&mut attributes, "state")
                .filter(|state| !state.is_null())
                .map(value::coerce_state);

            entities.push(inventory::Entity {
                name: Some(name),
                id: Some(id),
                area: area_id.map(str::to_string),
                device: Some(device_id.clone()),
                state,
                attributes: (!attributes.is_empty()).then_some(attributes),
            });
        }
    }
    entities
}

/// Turn a raw device name into its display form: underscores become
/// spaces, then each word is title-cased.
fn display_name(raw_name: &str) -> String {
    title_case(&raw_name.replace('_', " "))
}

/// Title-case every word: an alphabetic character is uppercased when the
/// previous character was not alphabetic, lowercased otherwise.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|ch| ch.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
