//! Template source port — where device type documents come from.

use serde_yaml::Value;

use synthome_domain::error::SynthomeError;

/// One raw device type document together with the file name it was read
/// from. The file name is kept so the registry can verify it matches the
/// declared `device_type`.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    /// The bare file name, e.g. `camera.yaml`.
    pub file_name: String,

    /// The parsed YAML document.
    pub document: Value,
}

/// Supplies the raw device type documents making up a registry.
///
/// Implementations read a directory, embedded resources, or an in-memory
/// collection; the registry service does not care which.
pub trait TemplateSource {
    /// Load all template documents, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`SynthomeError::Encoding`] when the backing documents
    /// cannot be read or are not valid YAML.
    fn load(&self) -> Result<Vec<TemplateDocument>, SynthomeError>;
}
