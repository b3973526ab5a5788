//! Tessera: typed rich-content messages over flat content parts.
//!
//! A rich message (an audio clip, a text card, any plugin-defined type) is
//! held in memory as a typed, observable model and travels as one JSON root
//! part plus role-tagged sibling parts for binary payloads. This crate
//! provides the engine that converts between the two and the process-wide
//! registry that maps MIME types to model types.
//!
//! # Architecture
//!
//! Tessera follows hexagonal architecture principles:
//!
//! - **Domain**: Parts, schemas and descriptors with no I/O dependencies
//! - **Ports**: Traits for media probing, stream fetching and transport
//! - **Adapters**: In-memory implementations of the ports
//!
//! # Modules
//!
//! - [`content`]: Content parts, the model engine, and message assembly
//! - [`type_registry`]: Registration and lookup of model types
//! - [`message_types`]: Built-in audio and text models
//! - [`config`]: Pipeline tuning

pub mod config;
pub mod content;
pub mod message_types;
pub mod type_registry;
