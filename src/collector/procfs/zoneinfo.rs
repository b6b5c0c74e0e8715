//! Memory zones from `/proc/zoneinfo` (since Linux 2.6.13).

use crate::collector::error::{CollectError, ParseError};
use crate::collector::mount::MountPoint;
use crate::collector::traits::FileSystem;
use crate::model::ZoneInfo;
use tracing::trace;

/// Parses `/proc/zoneinfo` content.
///
/// Only zone header lines are used:
/// ```text
/// Node 0, zone   Normal
/// ```
/// All other lines (page counters, pagesets, per-node stats) are ignored.
pub fn parse_zoneinfo(content: &str) -> Result<Vec<ZoneInfo>, ParseError> {
    let mut zones = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if !line.starts_with("Node") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ParseError::new(format!(
                "line {}: expected \"Node <id>, zone <name>\", got {:?}",
                idx + 1,
                line
            )));
        }

        zones.push(ZoneInfo {
            node: parts[1].trim_end_matches(',').to_string(),
            zone: parts[3].trim_end_matches(',').to_string(),
        });
    }

    Ok(zones)
}

/// Collects memory zones from `<proc>/zoneinfo`.
pub struct ZoneInfoCollector<F: FileSystem> {
    fs: F,
    mount: MountPoint,
}

impl<F: FileSystem> ZoneInfoCollector<F> {
    /// Creates a new zoneinfo collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `mount` - Procfs mount point (usually "/proc")
    pub fn new(fs: F, mount: MountPoint) -> Self {
        Self { fs, mount }
    }

    /// Reads and parses `zoneinfo`, in file order.
    pub fn collect(&self) -> Result<Vec<ZoneInfo>, CollectError> {
        let path = self.mount.path("zoneinfo");
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| CollectError::io(&path, e))?;
        let zones = parse_zoneinfo(&content).map_err(|e| CollectError::parse(&path, e))?;

        trace!(zones = zones.len(), "collected zoneinfo");
        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;
    use std::path::Path;

    fn zone(node: &str, zone: &str) -> ZoneInfo {
        ZoneInfo {
            node: node.to_string(),
            zone: zone.to_string(),
        }
    }

    #[test]
    fn test_parse_zoneinfo_header_line() {
        let zones = parse_zoneinfo("Node 0, zone      DMA\n  pages free     2604\n").unwrap();
        assert_eq!(zones, vec![zone("0", "DMA")]);
    }

    #[test]
    fn test_parse_zoneinfo_ignores_other_lines() {
        let zones = parse_zoneinfo("  per-node stats\n    nr_free_pages 2604\n").unwrap();
        assert!(zones.is_empty());

        // Leading whitespace means it is not a header line
        let zones = parse_zoneinfo("  Node 0, zone DMA\n").unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn test_parse_zoneinfo_multi_node() {
        let content = "\
Node 0, zone   Normal
  pages free     18553
Node 1, zone   Normal
  pages free     20011
";
        let zones = parse_zoneinfo(content).unwrap();
        assert_eq!(zones, vec![zone("0", "Normal"), zone("1", "Normal")]);
    }

    #[test]
    fn test_parse_zoneinfo_short_node_line() {
        let err = parse_zoneinfo("Node 0, zone      DMA\nNode 1,\n").unwrap_err();
        assert!(err.message.starts_with("line 2"));
    }

    #[test]
    fn test_zoneinfo_collector() {
        let fs = MockFs::single_node_procfs();
        let mount = MountPoint::new(&fs, "/proc").unwrap();
        let zones = ZoneInfoCollector::new(fs, mount).collect().unwrap();

        assert_eq!(
            zones,
            vec![
                zone("0", "DMA"),
                zone("0", "DMA32"),
                zone("0", "Normal"),
                zone("0", "Movable"),
            ]
        );
    }

    #[test]
    fn test_zoneinfo_collector_missing_file() {
        let mut fs = MockFs::new();
        fs.add_dir("/proc");
        let mount = MountPoint::new(&fs, "/proc").unwrap();

        let err = ZoneInfoCollector::new(fs, mount).collect().unwrap_err();
        assert!(matches!(err, CollectError::Io { .. }));
        assert_eq!(err.path(), Path::new("/proc/zoneinfo"));
    }

    #[test]
    fn test_zoneinfo_collector_malformed() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/zoneinfo", "Node 0\n");
        let mount = MountPoint::new(&fs, "/proc").unwrap();

        let err = ZoneInfoCollector::new(fs, mount).collect().unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
    }
}
