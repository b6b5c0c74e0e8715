//! Collectors for the Linux `/sys` filesystem.
//!
//! Sysfs exposes one attribute per file. Per-CPU subsystems live under
//! `devices/system/cpu/cpu<N>/<subsystem>/` and are mapped onto records
//! through the [`CpuAttributes`] trait.

mod cpu;
mod cpufreq;
mod range;
mod thermal;
mod topology;

pub use cpu::{CPU_DEVICES_DIR, CpuCollector};
pub use range::parse_cpu_list;

use crate::collector::error::ParseError;
use std::str::FromStr;

/// A per-CPU record populated from one sysfs subsystem directory.
pub trait CpuAttributes: Default {
    /// Directory name under `cpu<N>/`, e.g. `cpufreq`.
    const SUBSYSTEM: &'static str;

    /// Stores one trimmed attribute value.
    ///
    /// Unknown attribute names are ignored. On a conversion error the field
    /// keeps its previous value.
    fn apply(&mut self, name: &str, value: &str) -> Result<(), ParseError>;
}

/// Parses a decimal integer attribute.
pub(crate) fn parse_int<T>(value: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ParseError::new(format!("invalid integer {:?}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u64>("2300000"), Ok(2_300_000));
        assert_eq!(parse_int::<i64>("-1"), Ok(-1));
        assert!(parse_int::<u64>("<unsupported>").is_err());
        assert!(parse_int::<u64>("").is_err());
    }
}
