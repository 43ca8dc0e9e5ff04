//! Common error types used across the workspace.
//!
//! Each stage has its own typed error: [`LoadError`] for document parsing
//! and registry construction, [`ResolutionError`] for resolving devices
//! against the registry. [`SynthomeError`] is the workspace-wide umbrella
//! that adapters and services convert into via `#[from]`.

/// Errors raised while parsing documents or assembling the registry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A document omits a field the model requires.
    #[error("missing required field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: String,
    },

    /// A document node has the wrong shape (e.g. a list where a mapping
    /// is required).
    #[error("expected {expected} in {context}")]
    UnexpectedShape {
        context: String,
        expected: &'static str,
    },

    /// An entity state key is not of the form `<platform>.<key>`.
    #[error("invalid entity state key `{reference}`, expected `<platform>.<key>`")]
    InvalidEntityReference { reference: String },

    /// A predefined device state refers to an entity the device type does
    /// not declare.
    #[error("device type `{device_type}` state `{state}` references unknown entity `{reference}`")]
    DanglingStateReference {
        device_type: String,
        state: String,
        reference: String,
    },

    /// Two device type documents declare the same identifier.
    #[error("device registry contains duplicate device type `{device_type}`")]
    DuplicateDeviceType { device_type: String },

    /// A device type document lives in a file that does not match its
    /// declared identifier.
    #[error("device type `{device_type}` does not match its file name `{file_name}`")]
    FileNameMismatch {
        device_type: String,
        file_name: String,
    },

    /// An inventory entity is missing its mandatory `id`.
    #[error("inventory entity `{entity}` has no value for `id`")]
    EntityMissingId { entity: String },
}

/// Errors raised while resolving declared devices against the registry.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// The declared device type is not present in the registry.
    #[error("device `{device}` has unknown device type `{device_type}`")]
    UnknownDeviceType {
        device: String,
        device_type: String,
    },

    /// The device names a predefined state its device type does not define.
    #[error("device `{device}` selects state `{state}` not defined by device type `{device_type}`")]
    UnknownState {
        device: String,
        device_type: String,
        state: String,
    },

    /// Neither the device nor its device type provide a usable state.
    #[error("device `{device}` did not declare a device state")]
    MissingState { device: String },

    /// The device carries an inline state overlay that does not parse.
    #[error("device `{device}` has an invalid inline device state")]
    InvalidInlineState {
        device: String,
        #[source]
        source: LoadError,
    },
}

/// Workspace-wide error, aggregating the typed errors of every stage.
#[derive(Debug, thiserror::Error)]
pub enum SynthomeError {
    #[error("Load error")]
    Load(#[from] LoadError),

    #[error("Resolution error")]
    Resolution(#[from] ResolutionError),

    #[error("Encoding error")]
    Encoding(#[source] Box<dyn std::error::Error + Send + Sync>),
}
