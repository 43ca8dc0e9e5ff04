//! Parsing of device type and home documents from plain YAML values, and
//! the inverse rendering used to list templates back out.
//!
//! Documents are parsed with explicit shape checks rather than derived
//! deserializers so errors can point at the offending field, and so the
//! authored ordering of states, entities, and attributes survives into the
//! model untouched.

use serde_yaml::{Mapping, Value};

use crate::device::{Device, DeviceInfo, DeviceStateSelector};
use crate::device_type::{DeviceType, EntityEntry, PlatformEntities};
use crate::error::LoadError;
use crate::home::{AreaDevices, SyntheticHome};
use crate::state::{DeviceState, EntityState};
use crate::value;

/// Parse a device type document.
///
/// # Errors
///
/// Returns [`LoadError`] when required fields are missing, a node has the
/// wrong shape, an entity state key is not `<platform>.<key>`, or a
/// predefined state references an entity the type does not declare.
pub fn parse_device_type(document: &Value) -> Result<DeviceType, LoadError> {
    let mapping = as_mapping(document, "device type document")?;
    let device_type = required_str(mapping, "device_type", "device type document")?;
    let context = format!("device type `{device_type}`");
    let desc = required_str(mapping, "desc", &context)?;

    let device_states = match value::entry(mapping, "device_states") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Mapping(states)) => states
            .iter()
            .map(|(name, overlay)| {
                let name = string_key(name, &format!("state name in {context}"))?;
                match overlay {
                    Value::Null => Ok(DeviceState {
                        name: name.to_string(),
                        entity_states: Vec::new(),
                    }),
                    Value::Mapping(overlay) => parse_device_state(name, overlay),
                    _ => Err(LoadError::UnexpectedShape {
                        context: format!("state `{name}` of {context}"),
                        expected: "a mapping of `<platform>.<key>` entries",
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(LoadError::UnexpectedShape {
                context: format!("field `device_states` of {context}"),
                expected: "a mapping of state names",
            });
        }
    };

    let entities = match value::entry(mapping, "entities") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Mapping(platforms)) => platforms
            .iter()
            .map(|(platform, entries)| parse_platform_entities(platform, entries, &context))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(LoadError::UnexpectedShape {
                context: format!("field `entities` of {context}"),
                expected: "a mapping of platforms",
            });
        }
    };

    DeviceType::builder()
        .device_type(device_type)
        .desc(desc)
        .device_states(device_states)
        .entities(entities)
        .build()
}

/// Parse one named device state from its `<platform>.<key>` overlay.
///
/// Also used during resolution to turn an inline `device_state` mapping
/// into a one-off state.
///
/// # Errors
///
/// Returns [`LoadError::InvalidEntityReference`] when a key does not split
/// into exactly two dot-separated parts.
pub fn parse_device_state(name: &str, overlay: &Mapping) -> Result<DeviceState, LoadError> {
    let entity_states = overlay
        .iter()
        .map(|(reference, state)| {
            let reference = string_key(reference, &format!("entity key in state `{name}`"))?;
            let mut parts = reference.split('.');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(platform), Some(key), None) => Ok(EntityState {
                    platform: platform.to_string(),
                    key: key.to_string(),
                    state: state.clone(),
                }),
                _ => Err(LoadError::InvalidEntityReference {
                    reference: reference.to_string(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DeviceState {
        name: name.to_string(),
        entity_states,
    })
}

/// Parse a home document into its declared areas, devices, and services.
///
/// # Errors
///
/// Returns [`LoadError`] when the document or any device declaration has
/// the wrong shape or omits a required field.
pub fn parse_home(document: &Value) -> Result<SyntheticHome, LoadError> {
    let mapping = as_mapping(document, "home document")?;
    let name = optional_str(mapping, "name", "home document")?;

    let areas = match value::entry(mapping, "devices") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Mapping(areas)) => areas
            .iter()
            .map(|(area, devices)| {
                let area = string_key(area, "area name in home document")?;
                let devices = parse_devices(devices, &format!("area `{area}`"))?;
                Ok(AreaDevices {
                    area: area.to_string(),
                    devices,
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(LoadError::UnexpectedShape {
                context: "field `devices` of home document".to_string(),
                expected: "a mapping of area names",
            });
        }
    };

    let services = match value::entry(mapping, "services") {
        None | Some(Value::Null) => Vec::new(),
        Some(services) => parse_devices(services, "services")?,
    };

    Ok(SyntheticHome {
        name,
        areas,
        services,
    })
}

/// Render a device type back into its document shape, losslessly inverting
/// [`parse_device_type`].
#[must_use]
pub fn render_device_type(device_type: &DeviceType) -> Value {
    let mut document = Mapping::new();
    document.insert(
        Value::from("device_type"),
        Value::from(device_type.device_type.clone()),
    );
    document.insert(Value::from("desc"), Value::from(device_type.desc.clone()));

    if !device_type.device_states.is_empty() {
        let mut states = Mapping::new();
        for state in &device_type.device_states {
            let mut overlay = Mapping::new();
            for entity_state in &state.entity_states {
                overlay.insert(
                    Value::from(entity_state.platform_key()),
                    entity_state.state.clone(),
                );
            }
            states.insert(Value::from(state.name.clone()), Value::Mapping(overlay));
        }
        document.insert(Value::from("device_states"), Value::Mapping(states));
    }

    if !device_type.entities.is_empty() {
        let mut platforms = Mapping::new();
        for group in &device_type.entities {
            let mut entries = Mapping::new();
            for entry in &group.entries {
                entries.insert(
                    Value::from(entry.key.clone()),
                    Value::Mapping(entry.attributes.clone()),
                );
            }
            platforms.insert(Value::from(group.platform.clone()), Value::Mapping(entries));
        }
        document.insert(Value::from("entities"), Value::Mapping(platforms));
    }

    Value::Mapping(document)
}

fn parse_platform_entities(
    platform: &Value,
    entries: &Value,
    context: &str,
) -> Result<PlatformEntities, LoadError> {
    let platform = string_key(platform, &format!("platform name in {context}"))?;
    let entries = match entries {
        Value::Null => Vec::new(),
        Value::Mapping(entries) => entries
            .iter()
            .map(|(key, attributes)| {
                let key = string_key(
                    key,
                    &format!("entity key of platform `{platform}` in {context}"),
                )?;
                let attributes = match attributes {
                    Value::Null => Mapping::new(),
                    Value::Mapping(attributes) => attributes.clone(),
                    _ => {
                        return Err(LoadError::UnexpectedShape {
                            context: format!("entity `{platform}.{key}` in {context}"),
                            expected: "a mapping of attributes",
                        });
                    }
                };
                Ok(EntityEntry {
                    key: key.to_string(),
                    attributes,
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(LoadError::UnexpectedShape {
                context: format!("platform `{platform}` in {context}"),
                expected: "a mapping of entity keys",
            });
        }
    };
    Ok(PlatformEntities {
        platform: platform.to_string(),
        entries,
    })
}

fn parse_devices(value: &Value, context: &str) -> Result<Vec<Device>, LoadError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| parse_device(item, context))
            .collect(),
        _ => Err(LoadError::UnexpectedShape {
            context: context.to_string(),
            expected: "a list of devices",
        }),
    }
}

fn parse_device(value: &Value, context: &str) -> Result<Device, LoadError> {
    let mapping = as_mapping(value, &format!("device in {context}"))?;
    let name = required_str(mapping, "name", &format!("device in {context}"))?;
    let device_context = format!("device `{name}`");
    let device_type = required_str(mapping, "device_type", &device_context)?;

    let device_info = match value::entry(mapping, "device_info") {
        None | Some(Value::Null) => None,
        Some(info) => Some(parse_device_info(info, &device_context)?),
    };

    let device_state = match value::entry(mapping, "device_state") {
        None | Some(Value::Null) => DeviceStateSelector::Unselected,
        Some(Value::String(named)) => DeviceStateSelector::Named(named.clone()),
        Some(Value::Mapping(overlay)) => DeviceStateSelector::Inline(overlay.clone()),
        Some(_) => {
            return Err(LoadError::UnexpectedShape {
                context: format!("field `device_state` of {device_context}"),
                expected: "a state name or a mapping of `<platform>.<key>` entries",
            });
        }
    };

    Ok(Device {
        name,
        device_type,
        device_info,
        device_state,
        entity_entries: Vec::new(),
    })
}

fn parse_device_info(value: &Value, context: &str) -> Result<DeviceInfo, LoadError> {
    let mapping = as_mapping(value, &format!("field `device_info` of {context}"))?;
    Ok(DeviceInfo {
        model: optional_scalar(mapping, "model", context)?,
        manufacturer: optional_scalar(mapping, "manufacturer", context)?,
        sw_version: optional_scalar(mapping, "sw_version", context)?,
    })
}

fn as_mapping<'a>(value: &'a Value, context: &str) -> Result<&'a Mapping, LoadError> {
    value.as_mapping().ok_or_else(|| LoadError::UnexpectedShape {
        context: context.to_string(),
        expected: "a mapping",
    })
}

fn string_key<'a>(key: &'a Value, context: &str) -> Result<&'a str, LoadError> {
    key.as_str().ok_or_else(|| LoadError::UnexpectedShape {
        context: context.to_string(),
        expected: "a string",
    })
}

fn required_str(
    mapping: &Mapping,
    field: &'static str,
    context: &str,
) -> Result<String, LoadError> {
    match value::entry(mapping, field) {
        None | Some(Value::Null) => Err(LoadError::MissingField {
            field,
            context: context.to_string(),
        }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(LoadError::UnexpectedShape {
            context: format!("field `{field}` of {context}"),
            expected: "a string",
        }),
    }
}

fn optional_str(
    mapping: &Mapping,
    field: &'static str,
    context: &str,
) -> Result<Option<String>, LoadError> {
    match value::entry(mapping, field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(LoadError::UnexpectedShape {
            context: format!("field `{field}` of {context}"),
            expected: "a string",
        }),
    }
}

/// Like [`optional_str`] but also accepts numbers, rendered as strings.
/// Version fields such as `sw_version: 1.0` parse as YAML numbers.
fn optional_scalar(
    mapping: &Mapping,
    field: &'static str,
    context: &str,
) -> Result<Option<String>, LoadError> {
    match value::entry(mapping, field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(LoadError::UnexpectedShape {
            context: format!("field `{field}` of {context}"),
            expected: "a string",
        }),
    }
}
