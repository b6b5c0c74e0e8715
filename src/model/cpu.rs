//! CPU records collected from `/sys/devices/system/cpu`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// System-wide CPU enumeration.
///
/// Source: flat files directly under `/sys/devices/system/cpu`.
/// See https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-devices-system-cpu
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuEnumeration {
    /// Highest CPU number the kernel was built to support.
    /// Source: `kernel_max`
    pub kernel_max: u32,

    /// CPUs that are not online, because hotplugged off or exceeding the limit.
    /// Source: `offline`
    pub offline: Vec<u32>,

    /// CPUs currently scheduled by the kernel.
    /// Source: `online`
    pub online: Vec<u32>,

    /// CPUs that have been allocated resources and can be brought online.
    /// Source: `possible`
    pub possible: Vec<u32>,

    /// CPUs identified as being present in the system.
    /// Source: `present`
    pub present: Vec<u32>,
}

/// Frequency scaling state of one CPU.
///
/// Source: `/sys/devices/system/cpu/cpu<N>/cpufreq/*`. Frequencies are in kHz.
/// See https://www.kernel.org/doc/Documentation/cpu-freq/user-guide.txt
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuFreq {
    /// Source: `cpuinfo_cur_freq`
    pub cpuinfo_cur_freq: u64,
    /// Source: `cpuinfo_max_freq`
    pub cpuinfo_max_freq: u64,
    /// Source: `cpuinfo_min_freq`
    pub cpuinfo_min_freq: u64,
    /// Time to switch between two frequencies, in nanoseconds.
    /// Source: `cpuinfo_transition_latency`
    pub cpuinfo_transition_latency: u64,
    /// Space separated governor names.
    /// Source: `scaling_available_governors`
    pub scaling_available_governors: String,
    /// Source: `scaling_cur_freq`
    pub scaling_cur_freq: u64,
    /// Source: `scaling_driver`
    pub scaling_driver: String,
    /// Source: `scaling_governor`
    pub scaling_governor: String,
    /// Source: `scaling_max_freq`
    pub scaling_max_freq: u64,
    /// Source: `scaling_min_freq`
    pub scaling_min_freq: u64,
    /// Only meaningful with the `userspace` governor; `<unsupported>` otherwise.
    /// Source: `scaling_setspeed`
    pub scaling_setspeed: u64,
}

/// Position of one CPU in the package/core/thread hierarchy.
///
/// Source: `/sys/devices/system/cpu/cpu<N>/topology/*`.
/// See https://www.kernel.org/doc/Documentation/cputopology.txt
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuTopology {
    /// Source: `core_id`
    pub core_id: i64,
    /// Hex mask. Source: `core_siblings`
    pub core_siblings: String,
    /// Range notation, e.g. `0-23,48-71`. Source: `core_siblings_list`
    pub core_siblings_list: String,
    /// `-1` on platforms that do not report a package.
    /// Source: `physical_package_id`
    pub physical_package_id: i64,
    /// Hex mask. Source: `thread_siblings`
    pub thread_siblings: String,
    /// Source: `thread_siblings_list`
    pub thread_siblings_list: String,
}

/// Thermal throttling event counters of one CPU.
///
/// Source: `/sys/devices/system/cpu/cpu<N>/thermal_throttle/*` (x86 only).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuThermalThrottle {
    /// Source: `core_throttle_count`
    pub core_throttle_count: u64,
    /// Source: `package_throttle_count`
    pub package_throttle_count: u64,
}

/// Everything known about the CPUs of the host.
///
/// The per-CPU maps are keyed by kernel CPU number and hold one entry for
/// every CPU in `enumeration.online`. A CPU that lacks a subsystem directory
/// has a default (all zero) entry rather than a missing one.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuInfo {
    pub enumeration: CpuEnumeration,
    pub freq: BTreeMap<u32, CpuFreq>,
    pub topology: BTreeMap<u32, CpuTopology>,
    pub thermal_throttle: BTreeMap<u32, CpuThermalThrottle>,
}

impl CpuInfo {
    /// Number of online CPUs described by this snapshot.
    pub fn online_count(&self) -> usize {
        self.enumeration.online.len()
    }
}
