//! Template loading — a directory holding one YAML file per device type.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use synthome_app::ports::{TemplateDocument, TemplateSource};
use synthome_domain::error::SynthomeError;

use crate::error::DocumentError;
use crate::home::read_file;

/// Loads device type templates from a directory of `.yaml` files.
///
/// Files with any other extension are skipped. Documents are returned
/// sorted by file name so registry construction does not depend on
/// directory iteration order.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    path: PathBuf,
}

impl DirectoryTemplateSource {
    /// Create a source reading from the given directory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_documents(&self) -> Result<Vec<TemplateDocument>, DocumentError> {
        let entries = std::fs::read_dir(&self.path).map_err(|source| DocumentError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DocumentError::Io {
                path: self.path.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension() == Some(OsStr::new("yaml")) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in &paths {
            documents.push(read_document(path)?);
        }
        tracing::debug!(
            path = %self.path.display(),
            count = documents.len(),
            "loaded template documents"
        );
        Ok(documents)
    }
}

impl TemplateSource for DirectoryTemplateSource {
    fn load(&self) -> Result<Vec<TemplateDocument>, SynthomeError> {
        Ok(self.read_documents()?)
    }
}

fn read_document(path: &Path) -> Result<TemplateDocument, DocumentError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = read_file(path)?;
    let document = serde_yaml::from_str(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TemplateDocument {
        file_name,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn should_load_yaml_documents_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "light.yaml", "device_type: light\n");
        write_file(dir.path(), "camera.yaml", "device_type: camera\n");
        write_file(dir.path(), "notes.txt", "not a template\n");

        let documents = DirectoryTemplateSource::new(dir.path()).load().unwrap();

        let names: Vec<_> = documents
            .iter()
            .map(|doc| doc.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["camera.yaml", "light.yaml"]);
        assert_eq!(
            documents[0].document.get("device_type").and_then(|v| v.as_str()),
            Some("camera")
        );
    }

    #[test]
    fn should_load_nothing_from_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let documents = DirectoryTemplateSource::new(dir.path()).load().unwrap();

        assert!(documents.is_empty());
    }

    #[test]
    fn should_fail_when_directory_is_missing() {
        let source = DirectoryTemplateSource::new("no-such-template-directory");

        let err = source.read_documents().unwrap_err();

        assert!(matches!(err, DocumentError::Io { .. }));
    }

    #[test]
    fn should_report_malformed_template_with_file_path() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "broken.yaml", "states: [unclosed\n");

        let err = DirectoryTemplateSource::new(dir.path())
            .read_documents()
            .unwrap_err();

        match err {
            DocumentError::Parse { path, .. } => {
                assert!(path.ends_with("broken.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
