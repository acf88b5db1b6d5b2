//! Common test utilities for covergrab pipeline tests

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod platform;

#[allow(unused_imports)]
pub use fixtures::*;
pub use platform::*;
