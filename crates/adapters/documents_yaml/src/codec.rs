//! Inventory YAML encoding and decoding.

use synthome_domain::error::SynthomeError;
use synthome_domain::inventory::Inventory;

use crate::error::DocumentError;

/// Document start marker prepended to encoded inventories.
const DOCUMENT_START: &str = "---\n";

/// Render an inventory as a YAML document with an explicit `---` start.
///
/// # Errors
///
/// Returns [`SynthomeError::Encoding`] when serialization fails.
pub fn encode_inventory(inventory: &Inventory) -> Result<String, SynthomeError> {
    let rendered = serde_yaml::to_string(inventory).map_err(DocumentError::Encode)?;
    Ok(format!("{DOCUMENT_START}{rendered}"))
}

/// Parse an inventory from its YAML document form and fill in derived
/// identifiers.
///
/// # Errors
///
/// Returns [`SynthomeError::Encoding`] when the text is not valid YAML,
/// or [`SynthomeError::Load`] when an entity is missing its id.
pub fn decode_inventory(text: &str) -> Result<Inventory, SynthomeError> {
    let mut inventory: Inventory = serde_yaml::from_str(text).map_err(DocumentError::Decode)?;
    inventory.normalize()?;
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use synthome_domain::error::LoadError;
    use synthome_domain::inventory::{Area, Device, Entity};

    use super::*;

    #[test]
    fn should_encode_empty_inventory_with_document_start() {
        let rendered = encode_inventory(&Inventory::default()).unwrap();

        assert_eq!(rendered, "---\nareas: []\ndevices: []\nentities: []\n");
    }

    #[test]
    fn should_roundtrip_a_populated_inventory() {
        let mut area = Area::new("Backyard");
        area.floor = Some("Ground".to_string());
        let mut device = Device::new("Outdoor Camera");
        device.area = Some("backyard".to_string());
        let entity = Entity {
            name: Some("Outdoor Camera".to_string()),
            id: Some("camera.outdoor_camera".to_string()),
            area: Some("backyard".to_string()),
            device: Some("outdoor_camera".to_string()),
            state: Some(serde_yaml::Value::from("idle")),
            attributes: None,
        };
        let inventory = Inventory {
            language: Some("en".to_string()),
            areas: vec![area],
            devices: vec![device],
            entities: vec![entity],
        };

        let rendered = encode_inventory(&inventory).unwrap();
        let decoded = decode_inventory(&rendered).unwrap();

        assert_eq!(decoded, inventory);
    }

    #[test]
    fn should_fill_missing_ids_when_decoding() {
        let document = "
areas:
- name: Family Room
devices:
- name: Family Room Lamp
  area: family_room
entities:
- name: Family Room Lamp
  id: light.family_room_lamp
";
        let inventory = decode_inventory(document).unwrap();

        assert_eq!(inventory.areas[0].id.as_deref(), Some("family_room"));
        assert_eq!(
            inventory.devices[0].id.as_deref(),
            Some("family_room_lamp")
        );
    }

    #[test]
    fn should_reject_entities_without_id_when_decoding() {
        let document = "
entities:
- name: Tasks
";
        let err = decode_inventory(document).unwrap_err();

        assert!(matches!(
            err,
            SynthomeError::Load(LoadError::EntityMissingId { .. })
        ));
    }

    #[test]
    fn should_reject_text_that_is_not_an_inventory() {
        let err = decode_inventory("- just\n- a\n- list\n").unwrap_err();

        assert!(matches!(err, SynthomeError::Encoding(_)));
    }
}
