//! # synthome-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TemplateSource` — supply raw device type documents
//!   - `HomeSource` — supply a raw home document
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RegistryService` — load and validate the device type registry
//!   - `HomeService` — load a home, resolve its devices, build an inventory
//! - Orchestrate domain objects without knowing *how* documents are read
//!
//! ## Dependency rule
//! Depends on `synthome-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
