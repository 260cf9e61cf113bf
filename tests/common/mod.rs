//! Common test infrastructure
//!
//! Fixture builders shared by the integration tests. Tests should only
//! import from this module, not from internal submodules.

mod fixtures;

pub use fixtures::*;
