//! hostfs — typed snapshots of Linux `/proc` and `/sys` hardware state.
//!
//! Provides:
//! - `collector` — filesystem abstraction, mount points, zoneinfo and CPU collectors
//! - `model` — the records they produce (serde-serializable)
//!
//! Every read rescans the pseudo-filesystem; nothing is cached between calls.

pub mod collector;
pub mod model;

pub use collector::{CollectError, Collected, read_cpu_enumeration, read_cpu_info, read_zoneinfo};
