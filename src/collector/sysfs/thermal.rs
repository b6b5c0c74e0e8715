//! `cpu<N>/thermal_throttle` attribute mapping.

use super::{CpuAttributes, parse_int};
use crate::collector::error::ParseError;
use crate::model::CpuThermalThrottle;

impl CpuAttributes for CpuThermalThrottle {
    const SUBSYSTEM: &'static str = "thermal_throttle";

    fn apply(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "core_throttle_count" => self.core_throttle_count = parse_int(value)?,
            "package_throttle_count" => self.package_throttle_count = parse_int(value)?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_throttle_apply() {
        let mut throttle = CpuThermalThrottle::default();
        throttle.apply("core_throttle_count", "30").unwrap();
        throttle.apply("package_throttle_count", "45").unwrap();
        // Newer kernels also expose *_throttle_max_time_ms
        throttle.apply("core_throttle_max_time_ms", "12").unwrap();

        assert_eq!(
            throttle,
            CpuThermalThrottle {
                core_throttle_count: 30,
                package_throttle_count: 45,
            }
        );
    }
}
