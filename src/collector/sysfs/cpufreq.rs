//! `cpu<N>/cpufreq` attribute mapping.

use super::{CpuAttributes, parse_int};
use crate::collector::error::ParseError;
use crate::model::CpuFreq;

impl CpuAttributes for CpuFreq {
    const SUBSYSTEM: &'static str = "cpufreq";

    fn apply(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "cpuinfo_cur_freq" => self.cpuinfo_cur_freq = parse_int(value)?,
            "cpuinfo_max_freq" => self.cpuinfo_max_freq = parse_int(value)?,
            "cpuinfo_min_freq" => self.cpuinfo_min_freq = parse_int(value)?,
            "cpuinfo_transition_latency" => self.cpuinfo_transition_latency = parse_int(value)?,
            "scaling_available_governors" => self.scaling_available_governors = value.to_string(),
            "scaling_cur_freq" => self.scaling_cur_freq = parse_int(value)?,
            "scaling_driver" => self.scaling_driver = value.to_string(),
            "scaling_governor" => self.scaling_governor = value.to_string(),
            "scaling_max_freq" => self.scaling_max_freq = parse_int(value)?,
            "scaling_min_freq" => self.scaling_min_freq = parse_int(value)?,
            "scaling_setspeed" => self.scaling_setspeed = parse_int(value)?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpufreq_apply() {
        let mut freq = CpuFreq::default();
        freq.apply("cpuinfo_cur_freq", "1178125").unwrap();
        freq.apply("scaling_driver", "intel_pstate").unwrap();
        freq.apply("scaling_available_governors", "performance powersave")
            .unwrap();
        freq.apply("affected_cpus", "1").unwrap();

        assert_eq!(freq.cpuinfo_cur_freq, 1_178_125);
        assert_eq!(freq.scaling_driver, "intel_pstate");
        assert_eq!(freq.scaling_available_governors, "performance powersave");
    }

    #[test]
    fn test_cpufreq_unsupported_setspeed() {
        let mut freq = CpuFreq::default();
        assert!(freq.apply("scaling_setspeed", "<unsupported>").is_err());
        assert_eq!(freq.scaling_setspeed, 0);
    }
}
