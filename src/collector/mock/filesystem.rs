//! In-memory mock filesystem for testing collectors without real `/proc` or `/sys`.
//!
//! `MockFs` simulates a pseudo-filesystem in memory, so tests run on any
//! platform and in CI.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores files and directories in memory. Files can also be registered as
/// unreadable to simulate attributes that are only readable by root.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Set of directories (for read_dir support).
    directories: HashSet<PathBuf>,
    /// Files that are listed but fail to read with `PermissionDenied`.
    unreadable: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Adds a file that shows up in listings but cannot be read.
    pub fn add_unreadable_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.unreadable.insert(path);
    }

    /// Adds one file per `(name, value)` pair under `dir`.
    ///
    /// Values get the trailing newline the kernel prints.
    pub fn add_attributes(&mut self, dir: impl AsRef<Path>, attributes: &[(&str, &str)]) {
        let dir = dir.as_ref();
        self.add_dir(dir);
        for (name, value) in attributes {
            self.add_file(dir.join(name), format!("{}\n", value));
        }
    }

    /// Loads a mock filesystem from a directory snapshot, mounted at `virtual_root`.
    ///
    /// This is useful for regression tests with real `/sys` or `/proc` captures.
    pub fn from_snapshot(dir: &Path, virtual_root: impl AsRef<Path>) -> io::Result<Self> {
        let mut fs = Self::new();
        load_directory_recursive(&mut fs, dir, virtual_root.as_ref())?;
        Ok(fs)
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

fn load_directory_recursive(
    fs: &mut MockFs,
    real_path: &Path,
    virtual_path: &Path,
) -> io::Result<()> {
    fs.add_dir(virtual_path);

    for entry in std::fs::read_dir(real_path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let real_child = entry.path();
        let virtual_child = virtual_path.join(entry.file_name());

        if file_type.is_dir() {
            load_directory_recursive(fs, &real_child, &virtual_child)?;
        } else if file_type.is_file() {
            match std::fs::read_to_string(&real_child) {
                Ok(content) => fs.add_file(&virtual_child, content),
                // Keep root-only attributes visible, as they are on a live system
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    fs.add_unreadable_file(&virtual_child)
                }
                // Binary attributes
                Err(_) => {}
            }
        }
    }
    Ok(())
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {:?}", path),
            ));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.directories.contains(path)
            || self.unreadable.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let is_child = |p: &PathBuf| p.parent().is_some_and(|parent| parent == path);

        let entries: HashSet<PathBuf> = self
            .files
            .keys()
            .chain(self.unreadable.iter())
            .chain(self.directories.iter())
            .filter(|p| is_child(*p) && p.as_path() != path)
            .cloned()
            .collect();

        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/zoneinfo", "Node 0, zone      DMA\n");

        assert!(fs.exists(Path::new("/proc/zoneinfo")));
        assert!(fs.is_dir(Path::new("/proc")));
        assert!(!fs.is_dir(Path::new("/proc/zoneinfo")));

        let content = fs.read_to_string(Path::new("/proc/zoneinfo")).unwrap();
        assert_eq!(content, "Node 0, zone      DMA\n");
    }

    #[test]
    fn test_mock_fs_read_dir() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/devices/system/cpu/online", "0-1\n");
        fs.add_file("/sys/devices/system/cpu/cpu0/topology/core_id", "0\n");
        fs.add_file("/sys/devices/system/cpu/cpu1/topology/core_id", "1\n");

        let cpu_entries = fs.read_dir(Path::new("/sys/devices/system/cpu")).unwrap();
        assert_eq!(cpu_entries.len(), 3); // online, cpu0, cpu1

        let topology = fs
            .read_dir(Path::new("/sys/devices/system/cpu/cpu0/topology"))
            .unwrap();
        assert_eq!(topology.len(), 1);
    }

    #[test]
    fn test_mock_fs_add_attributes() {
        let mut fs = MockFs::new();
        fs.add_attributes(
            "/sys/devices/system/cpu/cpu1/thermal_throttle",
            &[("core_throttle_count", "30"), ("package_throttle_count", "45")],
        );

        let content = fs
            .read_to_string(Path::new(
                "/sys/devices/system/cpu/cpu1/thermal_throttle/core_throttle_count",
            ))
            .unwrap();
        assert_eq!(content, "30\n");
    }

    #[test]
    fn test_mock_fs_unreadable_file() {
        let mut fs = MockFs::new();
        fs.add_unreadable_file("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_cur_freq");

        let dir = Path::new("/sys/devices/system/cpu/cpu0/cpufreq");
        assert_eq!(fs.read_dir(dir).unwrap().len(), 1);
        let err = fs
            .read_to_string(&dir.join("cpuinfo_cur_freq"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/nonexistent"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
        assert!(fs.read_dir(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_mock_fs_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("devices/system/cpu/cpu0/topology")).unwrap();
        std::fs::write(
            dir.path().join("devices/system/cpu/cpu0/topology/core_id"),
            "0\n",
        )
        .unwrap();

        let fs = MockFs::from_snapshot(dir.path(), "/sys").unwrap();
        assert!(fs.is_dir(Path::new("/sys/devices/system/cpu/cpu0")));
        assert_eq!(
            fs.read_to_string(Path::new("/sys/devices/system/cpu/cpu0/topology/core_id"))
                .unwrap(),
            "0\n"
        );
    }
}
