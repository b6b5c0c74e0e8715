//! Memory zone records from `/proc/zoneinfo`.

use serde::{Deserialize, Serialize};

/// One memory zone of one NUMA node.
///
/// Source: `/proc/zoneinfo` lines of the form `Node 0, zone   Normal`.
/// Per-zone page statistics are not captured.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct ZoneInfo {
    /// NUMA node identifier, e.g. `"0"`.
    pub node: String,
    /// Zone name, e.g. `"DMA32"` or `"Normal"`.
    pub zone: String,
}
