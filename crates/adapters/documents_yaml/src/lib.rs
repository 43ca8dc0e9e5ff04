//! # synthome-adapter-documents-yaml
//!
//! YAML documents adapter — reads device type templates and home
//! definitions from disk and converts inventories to and from their
//! YAML document form.
//!
//! ## How it works
//!
//! Device type templates live as one YAML file per type inside a
//! directory; [`DirectoryTemplateSource`] lists that directory and hands
//! the raw documents to the application layer, which parses and
//! validates them. A home definition is a single YAML file loaded
//! through [`YamlHomeSource`]. Encoded inventories start with an
//! explicit `---` marker so they match the documents other tooling
//! writes and reads back.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `synthome-app` and `synthome-domain`.

mod codec;
mod error;
mod home;
mod templates;

pub use codec::{decode_inventory, encode_inventory};
pub use error::DocumentError;
pub use home::YamlHomeSource;
pub use templates::DirectoryTemplateSource;
