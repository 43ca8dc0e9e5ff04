//! # synthome-adapter-registry-builtin
//!
//! The device type templates bundled with the binary, one YAML document
//! per type.
//!
//! ## How it works
//!
//! Template files live under `src/registry/` and are embedded with
//! `include_str!`, so the CLI resolves homes without any template
//! directory on disk. A directory passed at runtime replaces the bundled
//! set entirely; the two sources are never mixed.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `synthome-app` and `synthome-domain`.

use serde_yaml::Value;

use synthome_app::ports::{TemplateDocument, TemplateSource};
use synthome_domain::error::SynthomeError;

/// The bundled template documents as `(file name, content)` pairs.
const TEMPLATES: &[(&str, &str)] = &[
    ("camera.yaml", include_str!("registry/camera.yaml")),
    ("hvac.yaml", include_str!("registry/hvac.yaml")),
    ("light.yaml", include_str!("registry/light.yaml")),
    ("motion-sensor.yaml", include_str!("registry/motion-sensor.yaml")),
    ("smart-lock.yaml", include_str!("registry/smart-lock.yaml")),
    ("smart-plug.yaml", include_str!("registry/smart-plug.yaml")),
    ("smart-speaker.yaml", include_str!("registry/smart-speaker.yaml")),
    ("window-sensor.yaml", include_str!("registry/window-sensor.yaml")),
];

/// Supplies the bundled device type templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateSource;

impl TemplateSource for BuiltinTemplateSource {
    fn load(&self) -> Result<Vec<TemplateDocument>, SynthomeError> {
        TEMPLATES
            .iter()
            .map(|(file_name, content)| {
                let document: Value = serde_yaml::from_str(content)
                    .map_err(|err| SynthomeError::Encoding(Box::new(err)))?;
                Ok(TemplateDocument {
                    file_name: (*file_name).to_string(),
                    document,
                })
            })
            .collect()
    }
}
