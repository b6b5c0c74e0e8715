//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs` and pre-built scenarios for testing
//! collectors without access to a Linux `/proc` or `/sys`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
