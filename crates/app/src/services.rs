//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod home_service;
pub mod registry_service;

pub use home_service::HomeService;
pub use registry_service::RegistryService;
