//! Unit tests for the built-in message types.
