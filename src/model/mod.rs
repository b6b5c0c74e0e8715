//! Typed records produced by the collectors.
//!
//! All records are plain value snapshots: they are built fresh on every read
//! and never mutated afterwards.

mod cpu;
mod zone;

pub use cpu::{CpuEnumeration, CpuFreq, CpuInfo, CpuThermalThrottle, CpuTopology};
pub use zone::ZoneInfo;
