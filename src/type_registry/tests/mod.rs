//! Unit tests for the type registry module.

mod domain_tests;
mod registry_tests;
