//! Home source port — where the home document comes from.

use serde_yaml::Value;

use synthome_domain::error::SynthomeError;

/// Supplies the raw home document to resolve and flatten.
pub trait HomeSource {
    /// Load the home document.
    ///
    /// # Errors
    ///
    /// Returns [`SynthomeError::Encoding`] when the backing document
    /// cannot be read or is not valid YAML.
    fn load(&self) -> Result<Value, SynthomeError>;
}
