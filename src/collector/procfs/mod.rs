//! Collectors for the Linux `/proc` filesystem.
//!
//! Parsers here are pure functions over file content; collectors pair them
//! with a [`FileSystem`](crate::collector::FileSystem) and a mount point.

pub mod zoneinfo;

pub use zoneinfo::{ZoneInfoCollector, parse_zoneinfo};
