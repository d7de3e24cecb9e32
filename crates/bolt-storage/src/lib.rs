//! Backing-store implementations for the Bolt URL registry.
//!
//! Two interchangeable variants: a process-lifetime in-memory map and a
//! MySQL-backed store with a persistent counter row. Both satisfy the
//! `UrlStore` contract from `bolt_core`.

pub mod memory;
pub mod mysql;

pub use bolt_core::store::UrlStore;
pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
