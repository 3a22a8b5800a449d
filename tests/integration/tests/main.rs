//! End-to-End Integration Tests
//!
//! These tests import legacy users into an in-memory realm through the
//! public provider surface, the same way a host wires it up.

mod group_race;
mod legacy_import;
