//! YAML documents adapter error types.

use std::path::PathBuf;

use synthome_domain::error::SynthomeError;

/// Errors specific to the YAML documents adapter.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The referenced file does not exist on disk.
    #[error("configuration file '{}' does not exist", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Reading a file or directory failed.
    #[error("failed to read {}", path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file contained malformed YAML.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// The path of the malformed file.
        path: PathBuf,
        /// The underlying YAML failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// Serializing an inventory to YAML failed.
    #[error("failed to encode inventory")]
    Encode(#[source] serde_yaml::Error),

    /// Deserializing an inventory from YAML failed.
    #[error("failed to decode inventory")]
    Decode(#[source] serde_yaml::Error),

    /// A domain-level error (template validation, missing ids, etc.).
    #[error("domain error")]
    Domain(#[source] SynthomeError),
}

impl DocumentError {
    /// Convert into a [`SynthomeError::Encoding`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> SynthomeError {
        match self {
            Self::Domain(err) => err,
            other => SynthomeError::Encoding(Box::new(other)),
        }
    }
}

impl From<DocumentError> for SynthomeError {
    fn from(err: DocumentError) -> Self {
        err.into_domain()
    }
}
