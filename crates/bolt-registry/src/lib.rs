//! URL registry service implementation.
//!
//! This crate provides the registry service (validation, dedup, short
//! code assignment) and the system name resolver. Core types are
//! re-exported from `bolt_core`.

pub mod resolver;
pub mod service;

pub use resolver::SystemResolver;
pub use service::RegistryService;
