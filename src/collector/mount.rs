//! Mount point resolution for pseudo-filesystems.

use crate::collector::error::CollectError;
use crate::collector::traits::FileSystem;
use std::path::{Path, PathBuf};

/// Conventional mount point of the proc filesystem.
pub const DEFAULT_PROC_MOUNT_POINT: &str = "/proc";

/// Conventional mount point of the sys filesystem.
pub const DEFAULT_SYS_MOUNT_POINT: &str = "/sys";

/// A validated pseudo-filesystem root.
///
/// Resolves paths relative to the mount point, e.g. `zoneinfo` against
/// `/proc` or `devices/system/cpu` against `/sys`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    root: PathBuf,
}

impl MountPoint {
    /// Creates a mount point after checking that `root` is a directory.
    pub fn new<F: FileSystem>(fs: &F, root: impl Into<PathBuf>) -> Result<Self, CollectError> {
        let root = root.into();
        if !fs.is_dir(&root) {
            return Err(CollectError::MountPoint(root));
        }
        Ok(Self { root })
    }

    /// Returns the mount point itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `relative` against the mount point.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;

    #[test]
    fn test_mount_point_resolves_relative_paths() {
        let mut fs = MockFs::new();
        fs.add_dir("/sys");
        let mount = MountPoint::new(&fs, DEFAULT_SYS_MOUNT_POINT).unwrap();
        assert_eq!(
            mount.path("devices/system/cpu"),
            PathBuf::from("/sys/devices/system/cpu")
        );
        assert_eq!(mount.root(), Path::new("/sys"));
    }

    #[test]
    fn test_mount_point_missing_root() {
        let fs = MockFs::new();
        let err = MountPoint::new(&fs, "/does/not/exist").unwrap_err();
        assert!(matches!(err, CollectError::MountPoint(ref p) if p == Path::new("/does/not/exist")));
    }

    #[test]
    fn test_mount_point_rejects_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/zoneinfo", "");
        assert!(MountPoint::new(&fs, "/proc/zoneinfo").is_err());
    }
}
