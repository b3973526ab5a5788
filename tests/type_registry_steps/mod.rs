//! Step definitions for type registry scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
