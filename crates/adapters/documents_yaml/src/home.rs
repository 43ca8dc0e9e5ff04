//! Home definition loading — a single YAML file on disk.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use synthome_app::ports::HomeSource;
use synthome_domain::error::SynthomeError;

use crate::error::DocumentError;

/// Loads a home definition document from a YAML file.
#[derive(Debug, Clone)]
pub struct YamlHomeSource {
    path: PathBuf,
}

impl YamlHomeSource {
    /// Create a source reading from the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HomeSource for YamlHomeSource {
    fn load(&self) -> Result<Value, SynthomeError> {
        let content = read_file(&self.path)?;
        let document: Value = serde_yaml::from_str(&content).map_err(|source| {
            DocumentError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %self.path.display(), "loaded home definition");
        Ok(document)
    }
}

/// Read a file to a string, mapping a missing file to
/// [`DocumentError::NotFound`].
pub(crate) fn read_file(path: &Path) -> Result<String, DocumentError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(DocumentError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_load_home_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.yaml");
        std::fs::write(&path, "name: Test Home\ndevices:\n  Kitchen: []\n").unwrap();

        let document = YamlHomeSource::new(&path).load().unwrap();

        assert_eq!(
            document.get("name").and_then(Value::as_str),
            Some("Test Home")
        );
        assert!(document.get("devices").is_some());
    }

    #[test]
    fn should_report_missing_file_by_name() {
        let err = YamlHomeSource::new("missing-home.yaml").load().unwrap_err();

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "configuration file 'missing-home.yaml' does not exist"
        );
    }

    #[test]
    fn should_report_malformed_yaml_with_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "devices: [unclosed\n").unwrap();

        let err = YamlHomeSource::new(&path).load().unwrap_err();

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("broken.yaml"));
    }
}
