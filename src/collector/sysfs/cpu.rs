//! CPU collector for `/sys/devices/system/cpu`.

use super::CpuAttributes;
use super::range::parse_cpu_list;
use crate::collector::error::{CollectError, Collected, FieldWarning};
use crate::collector::mount::MountPoint;
use crate::collector::sysfs::parse_int;
use crate::collector::traits::FileSystem;
use crate::model::{CpuEnumeration, CpuFreq, CpuInfo, CpuThermalThrottle, CpuTopology};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// CPU device directory, relative to the sysfs mount point.
pub const CPU_DEVICES_DIR: &str = "devices/system/cpu";

/// Collects CPU enumeration and per-CPU subsystem records from sysfs.
pub struct CpuCollector<F: FileSystem> {
    fs: F,
    mount: MountPoint,
}

impl<F: FileSystem> CpuCollector<F> {
    /// Creates a new CPU collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `mount` - Sysfs mount point (usually "/sys")
    pub fn new(fs: F, mount: MountPoint) -> Self {
        Self { fs, mount }
    }

    fn cpu_dir(&self) -> PathBuf {
        self.mount.path(CPU_DEVICES_DIR)
    }

    /// Collects `kernel_max`, `online`, `offline`, `possible` and `present`.
    ///
    /// Subdirectories and unknown files are skipped. Listing or reading
    /// failures abort the call; unparsable values only produce warnings.
    pub fn collect_enumeration(&self) -> Result<Collected<CpuEnumeration>, CollectError> {
        let dir = self.cpu_dir();
        let mut enumeration = CpuEnumeration::default();
        let mut warnings = Vec::new();

        for (path, name) in self.list_files(&dir)? {
            let content = self
                .fs
                .read_to_string(&path)
                .map_err(|e| CollectError::io(&path, e))?;
            let value = content.trim();

            let list = match name.as_str() {
                "kernel_max" => {
                    match parse_int(value) {
                        Ok(max) => enumeration.kernel_max = max,
                        Err(e) => warnings.push(FieldWarning::new(&path, value, e)),
                    }
                    continue;
                }
                "offline" => &mut enumeration.offline,
                "online" => &mut enumeration.online,
                "possible" => &mut enumeration.possible,
                "present" => &mut enumeration.present,
                _ => continue,
            };

            let (cpus, errors) = parse_cpu_list(value);
            *list = cpus;
            warnings.extend(
                errors
                    .into_iter()
                    .map(|e| FieldWarning::new(&path, value, e)),
            );
        }

        trace!(
            online = enumeration.online.len(),
            kernel_max = enumeration.kernel_max,
            "collected cpu enumeration"
        );

        Ok(Collected {
            value: enumeration,
            warnings,
        })
    }

    /// Collects `cpu<N>/cpufreq` for every CPU in `online`.
    pub fn collect_freq(
        &self,
        online: &[u32],
    ) -> Result<Collected<BTreeMap<u32, CpuFreq>>, CollectError> {
        self.collect_per_cpu(online)
    }

    /// Collects `cpu<N>/topology` for every CPU in `online`.
    pub fn collect_topology(
        &self,
        online: &[u32],
    ) -> Result<Collected<BTreeMap<u32, CpuTopology>>, CollectError> {
        self.collect_per_cpu(online)
    }

    /// Collects `cpu<N>/thermal_throttle` for every CPU in `online`.
    pub fn collect_thermal_throttle(
        &self,
        online: &[u32],
    ) -> Result<Collected<BTreeMap<u32, CpuThermalThrottle>>, CollectError> {
        self.collect_per_cpu(online)
    }

    /// Collects the enumeration and all per-CPU subsystems in one snapshot.
    pub fn collect_cpu_info(&self) -> Result<Collected<CpuInfo>, CollectError> {
        let Collected {
            value: enumeration,
            mut warnings,
        } = self.collect_enumeration()?;

        let freq = self.collect_freq(&enumeration.online)?;
        let topology = self.collect_topology(&enumeration.online)?;
        let thermal_throttle = self.collect_thermal_throttle(&enumeration.online)?;

        warnings.extend(freq.warnings);
        warnings.extend(topology.warnings);
        warnings.extend(thermal_throttle.warnings);

        Ok(Collected {
            value: CpuInfo {
                enumeration,
                freq: freq.value,
                topology: topology.value,
                thermal_throttle: thermal_throttle.value,
            },
            warnings,
        })
    }

    /// Reads one subsystem directory per online CPU.
    ///
    /// Every CPU in `online` gets an entry, keyed by CPU number. A missing
    /// subsystem directory leaves the default record in place.
    fn collect_per_cpu<T: CpuAttributes>(
        &self,
        online: &[u32],
    ) -> Result<Collected<BTreeMap<u32, T>>, CollectError> {
        let mut records = BTreeMap::new();
        let mut warnings = Vec::new();

        for &cpu in online {
            let record: &mut T = records.entry(cpu).or_default();
            let dir = self.cpu_dir().join(format!("cpu{}", cpu)).join(T::SUBSYSTEM);

            let files = match self.list_files(&dir) {
                Ok(files) => files,
                Err(_) => {
                    debug!(cpu, subsystem = T::SUBSYSTEM, "subsystem not available");
                    continue;
                }
            };

            for (path, name) in files {
                let content = self
                    .fs
                    .read_to_string(&path)
                    .map_err(|e| CollectError::io(&path, e))?;
                let value = content.trim();
                if let Err(e) = record.apply(&name, value) {
                    warnings.push(FieldWarning::new(&path, value, e));
                }
            }
        }

        Ok(Collected {
            value: records,
            warnings,
        })
    }

    /// Lists regular entries of `dir` as `(path, file name)`, sorted by name.
    fn list_files(&self, dir: &Path) -> Result<Vec<(PathBuf, String)>, CollectError> {
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|e| CollectError::io(dir, e))?;

        let mut files: Vec<(PathBuf, String)> = entries
            .into_iter()
            .filter(|path| !self.fs.is_dir(path))
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                Some((path, name))
            })
            .collect();
        files.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(files)
    }
}
