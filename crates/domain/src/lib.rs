//! # synthome-domain
//!
//! Pure domain model for the synthome synthetic-home generator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, identifier slugs, document values
//! - Define **Device types** (reusable templates describing entities and
//!   predefined device states)
//! - Define **Devices** (declared instances referencing a device type)
//! - Define **Homes** (areas and home-wide services with their devices)
//! - Merge rules for entity and device states
//! - Resolve declared devices against a device-type registry
//! - Flatten a resolved home into an **Inventory** (areas, devices, entities)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod slug;
pub mod value;

pub mod builder;
pub mod device;
pub mod device_type;
pub mod document;
pub mod home;
pub mod inventory;
pub mod resolver;
pub mod state;
