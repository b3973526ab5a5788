//! Model type registration and lookup.
//!
//! Plugins register model constructors by type name; the registry indexes
//! each one by its MIME type as well, so inbound messages can be matched to
//! a concrete model type. Lookups report absence as
//! [`RegistryError::NotRegistered`](domain::RegistryError::NotRegistered)
//! rather than failing hard.
//!
//! - Domain types in [`domain`]
//! - The registry itself in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
