//! Mount point configuration.

use crate::collector::error::CollectError;
use crate::collector::mount::{DEFAULT_PROC_MOUNT_POINT, DEFAULT_SYS_MOUNT_POINT, MountPoint};
use crate::collector::procfs::ZoneInfoCollector;
use crate::collector::sysfs::CpuCollector;
use crate::collector::traits::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the proc and sys filesystems are mounted.
///
/// Deserializes with missing keys falling back to `/proc` and `/sys`, so it
/// can be embedded in an agent's own configuration file. Pointing both roots
/// at a captured tree is how collectors run against fixtures or a host
/// filesystem bind-mounted into a container.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MountConfig {
    pub proc_path: PathBuf,
    pub sys_path: PathBuf,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            proc_path: PathBuf::from(DEFAULT_PROC_MOUNT_POINT),
            sys_path: PathBuf::from(DEFAULT_SYS_MOUNT_POINT),
        }
    }
}

impl MountConfig {
    pub fn with_proc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.proc_path = path.into();
        self
    }

    pub fn with_sys_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sys_path = path.into();
        self
    }

    /// Builds a zoneinfo collector rooted at `proc_path`.
    pub fn zoneinfo_collector<F: FileSystem>(
        &self,
        fs: F,
    ) -> Result<ZoneInfoCollector<F>, CollectError> {
        let mount = MountPoint::new(&fs, &self.proc_path)?;
        Ok(ZoneInfoCollector::new(fs, mount))
    }

    /// Builds a CPU collector rooted at `sys_path`.
    pub fn cpu_collector<F: FileSystem>(&self, fs: F) -> Result<CpuCollector<F>, CollectError> {
        let mount = MountPoint::new(&fs, &self.sys_path)?;
        Ok(CpuCollector::new(fs, mount))
    }
}
