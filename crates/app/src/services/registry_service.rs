//! Registry service — use-cases for loading the device type registry.

use synthome_domain::device_type::DeviceTypeRegistry;
use synthome_domain::document;
use synthome_domain::error::{LoadError, SynthomeError};

use crate::ports::TemplateSource;

/// Application service assembling the device type registry from a template
/// source.
pub struct RegistryService<S> {
    source: S,
}

impl<S: TemplateSource> RegistryService<S> {
    /// Create a new service backed by the given template source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load, validate, and index all device types.
    ///
    /// Every document must parse as a device type, live in a file named
    /// `<device_type>.yaml`, and declare an identifier not registered yet.
    ///
    /// # Errors
    ///
    /// Returns [`SynthomeError::Encoding`] when the source cannot be read,
    /// and [`SynthomeError::Load`] for invalid, misnamed, or duplicated
    /// documents.
    #[tracing::instrument(skip(self))]
    pub fn load_registry(&self) -> Result<DeviceTypeRegistry, SynthomeError> {
        let mut registry = DeviceTypeRegistry::new();
        for template in self.source.load()? {
            tracing::debug!(file_name = %template.file_name, "loading device type");
            let device_type = document::parse_device_type(&template.document)?;
            let expected = format!("{}.yaml", device_type.device_type);
            if template.file_name != expected {
                return Err(LoadError::FileNameMismatch {
                    device_type: device_type.device_type,
                    file_name: template.file_name,
                }
                .into());
            }
            registry.insert(device_type)?;
        }
        tracing::debug!(device_types = registry.len(), "device type registry loaded");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;
    use synthome_domain::error::LoadError;

    use super::*;
    use crate::ports::TemplateDocument;

    struct InMemoryTemplates {
        documents: Vec<(&'static str, &'static str)>,
    }

    impl TemplateSource for InMemoryTemplates {
        fn load(&self) -> Result<Vec<TemplateDocument>, SynthomeError> {
            self.documents
                .iter()
                .map(|(file_name, text)| {
                    let document: Value = serde_yaml::from_str(text)
                        .map_err(|err| SynthomeError::Encoding(Box::new(err)))?;
                    Ok(TemplateDocument {
                        file_name: (*file_name).to_string(),
                        document,
                    })
                })
                .collect()
        }
    }

    const LIGHT: &str = "
device_type: light
desc: A light.
device_states:
  'off':
    light.light: 'off'
entities:
  light:
    light:
      supported_color_modes:
        - onoff
";

    const SWITCH: &str = "
device_type: smart-plug
desc: A switched outlet.
device_states:
  'off':
    switch.outlet: 'off'
entities:
  switch:
    outlet:
      device_class: outlet
";

    #[test]
    fn should_load_and_index_all_templates() {
        let service = RegistryService::new(InMemoryTemplates {
            documents: vec![("light.yaml", LIGHT), ("smart-plug.yaml", SWITCH)],
        });

        let registry = service.load_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("light").is_some());
        assert!(registry.get("smart-plug").is_some());
    }

    #[test]
    fn should_reject_template_in_misnamed_file() {
        let service = RegistryService::new(InMemoryTemplates {
            documents: vec![("lamp.yaml", LIGHT)],
        });

        let result = service.load_registry();

        assert!(matches!(
            result,
            Err(SynthomeError::Load(LoadError::FileNameMismatch {
                device_type,
                file_name,
            })) if device_type == "light" && file_name == "lamp.yaml"
        ));
    }

    #[test]
    fn should_reject_duplicate_device_types() {
        let service = RegistryService::new(InMemoryTemplates {
            documents: vec![("light.yaml", LIGHT), ("light.yaml", LIGHT)],
        });

        let result = service.load_registry();

        assert!(matches!(
            result,
            Err(SynthomeError::Load(LoadError::DuplicateDeviceType { .. }))
        ));
    }

    #[test]
    fn should_propagate_parse_errors() {
        let service = RegistryService::new(InMemoryTemplates {
            documents: vec![("light.yaml", "device_type: light")],
        });

        let result = service.load_registry();

        assert!(matches!(
            result,
            Err(SynthomeError::Load(LoadError::MissingField { field: "desc", .. }))
        ));
    }
}
