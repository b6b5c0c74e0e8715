//! Pseudo-filesystem collectors for Linux.
//!
//! This module reads `/proc` and `/sys` into typed records, with support for
//! mocking so everything can be tested off Linux.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ZoneInfoCollector          CpuCollector                     │
//! │  - <proc>/zoneinfo          - <sys>/devices/system/cpu/*     │
//! │                             - cpu<N>/cpufreq                 │
//! │                             - cpu<N>/topology                │
//! │                             - cpu<N>/thermal_throttle        │
//! │           │                          │                       │
//! │           └────────────┬─────────────┘                       │
//! │                 ┌──────▼──────┐                              │
//! │                 │ MountPoint  │                              │
//! │                 └──────┬──────┘                              │
//! │                 ┌──────▼──────┐                              │
//! │                 │  FileSystem │ (trait)                      │
//! │                 └──────┬──────┘                              │
//! └────────────────────────┼─────────────────────────────────────┘
//!                 ┌────────┴────────┐
//!          ┌──────▼──────┐   ┌──────▼──────┐
//!          │   RealFs    │   │   MockFs    │
//!          └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use hostfs::collector::{MockFs, MountConfig};
//!
//! let collector = MountConfig::default()
//!     .cpu_collector(MockFs::multi_vendor_sysfs())
//!     .unwrap();
//! let info = collector.collect_cpu_info().unwrap();
//! assert_eq!(info.value.freq[&1].scaling_driver, "intel_pstate");
//! ```

mod config;
mod error;
pub mod mock;
mod mount;
pub mod procfs;
pub mod sysfs;
pub mod traits;

pub use config::MountConfig;
pub use error::{CollectError, Collected, FieldWarning, ParseError};
pub use mock::MockFs;
pub use mount::{DEFAULT_PROC_MOUNT_POINT, DEFAULT_SYS_MOUNT_POINT, MountPoint};
pub use procfs::ZoneInfoCollector;
pub use sysfs::CpuCollector;
pub use traits::{FileSystem, RealFs};

use crate::model::{CpuEnumeration, CpuInfo, ZoneInfo};

/// Reads `/proc/zoneinfo`.
pub fn read_zoneinfo() -> Result<Vec<ZoneInfo>, CollectError> {
    MountConfig::default().zoneinfo_collector(RealFs)?.collect()
}

/// Reads the CPU enumeration under `/sys/devices/system/cpu`.
pub fn read_cpu_enumeration() -> Result<Collected<CpuEnumeration>, CollectError> {
    MountConfig::default().cpu_collector(RealFs)?.collect_enumeration()
}

/// Reads the CPU enumeration and every per-CPU subsystem under `/sys`.
pub fn read_cpu_info() -> Result<Collected<CpuInfo>, CollectError> {
    MountConfig::default().cpu_collector(RealFs)?.collect_cpu_info()
}
