//! Predefined entity and device states, and the merge rules between them.
//!
//! States travel through two layers: an [`EntityState`] pins the value of a
//! single entity, and a [`DeviceState`] bundles the entity states that make
//! up one named, interesting condition of a device (e.g. a thermostat's
//! `warm` and `cool` rather than raw temperature numbers).

use serde_yaml::{Mapping, Value};

use crate::device_type::EntityEntry;
use crate::value;

/// The pinned state of a single entity, keyed by `<platform>.<key>`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    /// The entity platform, e.g. `binary_sensor`.
    pub platform: String,

    /// The entity key within the platform, e.g. `motion`.
    pub key: String,

    /// The value carried by this state: either a bare scalar or a mapping
    /// of attribute names to values.
    pub state: Value,
}

impl EntityState {
    /// The full `<platform>.<key>` reference for this state.
    #[must_use]
    pub fn platform_key(&self) -> String {
        format!("{}.{}", self.platform, self.key)
    }

    /// Merge another state for the same entity into this one.
    ///
    /// Both sides are viewed as attribute mappings, promoting a bare scalar
    /// `v` to `{state: v}` first. The merge is shallow and the incoming side
    /// wins on conflicting keys; keys only present in the base keep their
    /// position, incoming-only keys are appended.
    #[must_use]
    pub fn merge(&self, incoming: &Self) -> Self {
        let mut merged = as_overlay(&self.state);
        value::overwrite(&mut merged, &as_overlay(&incoming.state));
        Self {
            platform: self.platform.clone(),
            key: self.key.clone(),
            state: Value::Mapping(merged),
        }
    }
}

/// A named bundle of entity states describing one condition of a device.
///
/// The first state declared by a device type acts as its default.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    /// The label naming this state, e.g. `idle` or `motion-detected`.
    pub name: String,

    /// The entity states applied when this device state is selected.
    pub entity_states: Vec<EntityState>,
}

impl DeviceState {
    /// Find the state pinned for one entity, if any.
    #[must_use]
    pub fn entity_state(&self, platform: &str, key: &str) -> Option<&EntityState> {
        self.entity_states
            .iter()
            .find(|state| state.platform == platform && state.key == key)
    }

    /// Merge an incoming device state over this one.
    ///
    /// Entity states are matched by `<platform>.<key>`. Entries of the base
    /// keep their order and are merged per [`EntityState::merge`] when the
    /// incoming side pins the same entity; incoming-only entries are
    /// appended in their own order. The merged state keeps the base name.
    #[must_use]
    pub fn merge(&self, incoming: &Self) -> Self {
        let mut entity_states: Vec<EntityState> = self
            .entity_states
            .iter()
            .map(|base| {
                match incoming.entity_state(&base.platform, &base.key) {
                    Some(overlay) => base.merge(overlay),
                    None => base.clone(),
                }
            })
            .collect();
        for extra in &incoming.entity_states {
            if self.entity_state(&extra.platform, &extra.key).is_none() {
                entity_states.push(extra.clone());
            }
        }
        Self {
            name: self.name.clone(),
            entity_states,
        }
    }
}

/// Apply the pinned state for one entity onto its template attributes.
///
/// When `entity_states` pins `<platform>.<entry key>`, the pinned value is
/// viewed as an attribute mapping (scalars promote to `{state: v}`) and
/// shallow-merged over the entry's attributes, the pinned side winning.
/// When no state matches, the entry is returned unchanged.
#[must_use]
pub fn merge_entity_state_attributes(
    platform: &str,
    entry: &EntityEntry,
    entity_states: &[EntityState],
) -> EntityEntry {
    let Some(found) = entity_states
        .iter()
        .find(|state| state.platform == platform && state.key == entry.key)
    else {
        return entry.clone();
    };
    let mut attributes = entry.attributes.clone();
    value::overwrite(&mut attributes, &as_overlay(&found.state));
    EntityEntry {
        key: entry.key.clone(),
        attributes,
    }
}

/// View a state value as an attribute mapping, promoting a bare scalar `v`
/// to `{state: v}`.
fn as_overlay(state: &Value) -> Mapping {
    match state {
        Value::Mapping(mapping) => mapping.clone(),
        scalar => {
            let mut mapping = Mapping::new();
            mapping.insert(Value::from("state"), scalar.clone());
            mapping
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_state(platform: &str, key: &str, state: Value) -> EntityState {
        EntityState {
            platform: platform.to_string(),
            key: key.to_string(),
            state,
        }
    }

    fn mapping(pairs: &[(&str, Value)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| (Value::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn should_merge_mappings_with_incoming_side_winning() {
        let base = entity_state(
            "climate",
            "hvac",
            Value::Mapping(mapping(&[("x", Value::from(1)), ("y", Value::from(2))])),
        );
        let incoming = entity_state(
            "climate",
            "hvac",
            Value::Mapping(mapping(&[("y", Value::from(3)), ("z", Value::from(4))])),
        );

        let merged = base.merge(&incoming);

        assert_eq!(
            merged.state,
            Value::Mapping(mapping(&[
                ("x", Value::from(1)),
                ("y", Value::from(3)),
                ("z", Value::from(4)),
            ]))
        );
    }

    #[test]
    fn should_promote_scalars_to_state_attributes_when_merging() {
        let base = entity_state("light", "light", Value::from("off"));
        let incoming = entity_state(
            "light",
            "light",
            Value::Mapping(mapping(&[("brightness", Value::from(100))])),
        );

        let merged = base.merge(&incoming);

        assert_eq!(
            merged.state,
            Value::Mapping(mapping(&[
                ("state", Value::from("off")),
                ("brightness", Value::from(100)),
            ]))
        );
    }

    #[test]
    fn should_let_an_incoming_scalar_replace_the_base_state() {
        let base = entity_state("light", "light", Value::from("off"));
        let incoming = entity_state("light", "light", Value::from("on"));

        let merged = base.merge(&incoming);

        assert_eq!(
            merged.state,
            Value::Mapping(mapping(&[("state", Value::from("on"))]))
        );
    }

    #[test]
    fn should_keep_base_order_and_append_incoming_only_entity_states() {
        let base = DeviceState {
            name: "idle".to_string(),
            entity_states: vec![
                entity_state("binary_sensor", "motion", Value::from(false)),
                entity_state("camera", "camera", Value::from("idle")),
            ],
        };
        let incoming = DeviceState {
            name: "custom".to_string(),
            entity_states: vec![
                entity_state("camera", "camera", Value::from("recording")),
                entity_state("binary_sensor", "sound", Value::from(true)),
            ],
        };

        let merged = base.merge(&incoming);

        assert_eq!(merged.name, "idle");
        let keys: Vec<_> = merged
            .entity_states
            .iter()
            .map(EntityState::platform_key)
            .collect();
        assert_eq!(
            keys,
            vec!["binary_sensor.motion", "camera.camera", "binary_sensor.sound"]
        );
        assert_eq!(
            merged.entity_states[1].state,
            Value::Mapping(mapping(&[("state", Value::from("recording"))]))
        );
    }

    #[test]
    fn should_overlay_pinned_state_onto_entry_attributes() {
        let entry = EntityEntry {
            key: "motion".to_string(),
            attributes: mapping(&[("device_class", Value::from("motion"))]),
        };
        let states = vec![entity_state(
            "binary_sensor",
            "motion",
            Value::from(true),
        )];

        let merged = merge_entity_state_attributes("binary_sensor", &entry, &states);

        assert_eq!(
            merged.attributes,
            mapping(&[
                ("device_class", Value::from("motion")),
                ("state", Value::from(true)),
            ])
        );
    }

    #[test]
    fn should_return_entry_unchanged_when_no_state_matches() {
        let entry = EntityEntry {
            key: "motion".to_string(),
            attributes: mapping(&[("device_class", Value::from("motion"))]),
        };
        let states = vec![entity_state("binary_sensor", "sound", Value::from(true))];

        let merged = merge_entity_state_attributes("binary_sensor", &entry, &states);

        assert_eq!(merged, entry);
    }
}
