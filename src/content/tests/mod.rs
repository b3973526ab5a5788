//! Unit tests for the content module.
//!
//! Engine behaviour is exercised through a small fixture model so the
//! tests do not depend on any built-in message type.

mod pipeline_tests;
