//! `cpu<N>/topology` attribute mapping.

use super::{CpuAttributes, parse_int};
use crate::collector::error::ParseError;
use crate::model::CpuTopology;

impl CpuAttributes for CpuTopology {
    const SUBSYSTEM: &'static str = "topology";

    fn apply(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        match name {
            "core_id" => self.core_id = parse_int(value)?,
            "core_siblings" => self.core_siblings = value.to_string(),
            "core_siblings_list" => self.core_siblings_list = value.to_string(),
            "physical_package_id" => self.physical_package_id = parse_int(value)?,
            "thread_siblings" => self.thread_siblings = value.to_string(),
            "thread_siblings_list" => self.thread_siblings_list = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_apply() {
        let mut topology = CpuTopology::default();
        topology.apply("core_id", "48").unwrap();
        topology
            .apply("core_siblings_list", "0-1,8-9,16-17,24-25,32-33")
            .unwrap();
        topology.apply("physical_package_id", "-1").unwrap();

        assert_eq!(topology.core_id, 48);
        assert_eq!(topology.core_siblings_list, "0-1,8-9,16-17,24-25,32-33");
        assert_eq!(topology.physical_package_id, -1);
    }

    #[test]
    fn test_topology_bad_core_id() {
        let mut topology = CpuTopology::default();
        let err = topology.apply("core_id", "zero").unwrap_err();
        assert!(err.message.contains("zero"));
        assert_eq!(topology.core_id, 0);
    }
}
