//! Content parts and the typed models built from them.
//!
//! A message travels as one root part carrying a JSON body plus role-tagged
//! sibling parts for binary payloads. The [`model`] module turns local
//! models into that shape and back. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The model engine in [`model`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod model;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
