//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/sys` and `/proc` layouts captured
//! from real machines.

use super::filesystem::MockFs;

const CPU_DIR: &str = "/sys/devices/system/cpu";

impl MockFs {
    /// Sysfs CPU tree mixing three machines.
    ///
    /// * cpu0 - AMD EPYC, CentOS 7.4 x86_64, no `thermal_throttle`
    /// * cpu1 - Intel Skylake, CentOS 7.4 x86_64
    /// * cpu8 - IBM POWER8, CentOS 7.4 ppc64le, no `thermal_throttle`
    ///
    /// The online set is non-contiguous with 89 at position 23; the other
    /// online CPUs have no subsystem directories.
    pub fn multi_vendor_sysfs() -> Self {
        let mut fs = Self::new();

        fs.add_attributes(
            CPU_DIR,
            &[
                ("kernel_max", "2047"),
                ("offline", ""),
                ("online", "0-3,8-11,56-59,64-67,72-75,86-89"),
                ("possible", "0-95"),
                ("present", "0-95"),
                ("modalias", "cpu:type:x86,ven0002fam0017mod0001:feature:,0000"),
                ("uevent", ""),
            ],
        );
        fs.add_dir(format!("{}/cpuidle", CPU_DIR));
        fs.add_file(format!("{}/power/control", CPU_DIR), "auto\n");

        // AMD EPYC
        fs.add_attributes(
            format!("{}/cpu0/cpufreq", CPU_DIR),
            &[
                ("affected_cpus", "0"),
                ("cpuinfo_cur_freq", "2300000"),
                ("cpuinfo_max_freq", "2300000"),
                ("cpuinfo_min_freq", "1200000"),
                ("cpuinfo_transition_latency", "0"),
                ("related_cpus", "0"),
                ("scaling_available_governors", "performance"),
                ("scaling_cur_freq", "2300000"),
                ("scaling_driver", "acpi-cpufreq"),
                ("scaling_governor", "performance"),
                ("scaling_max_freq", "2300000"),
                ("scaling_min_freq", "1200000"),
                ("scaling_setspeed", "<unsupported>"),
            ],
        );
        fs.add_attributes(
            format!("{}/cpu0/topology", CPU_DIR),
            &[
                ("core_id", "0"),
                ("core_siblings", "00000000,00000000,00ffffff,00000000,00ffffff"),
                ("core_siblings_list", "0-23,48-71"),
                ("physical_package_id", "0"),
                ("thread_siblings", "00000000,00000000,00000001,00000000,00000001"),
                ("thread_siblings_list", "0,48"),
            ],
        );

        // Intel Skylake
        fs.add_attributes(
            format!("{}/cpu1/cpufreq", CPU_DIR),
            &[
                ("affected_cpus", "1"),
                ("cpuinfo_cur_freq", "1178125"),
                ("cpuinfo_max_freq", "3700000"),
                ("cpuinfo_min_freq", "1000000"),
                ("cpuinfo_transition_latency", "0"),
                ("related_cpus", "1"),
                ("scaling_available_governors", "performance powersave"),
                ("scaling_cur_freq", "1178125"),
                ("scaling_driver", "intel_pstate"),
                ("scaling_governor", "powersave"),
                ("scaling_max_freq", "3700000"),
                ("scaling_min_freq", "1000000"),
                ("scaling_setspeed", "<unsupported>"),
            ],
        );
        fs.add_attributes(
            format!("{}/cpu1/topology", CPU_DIR),
            &[
                ("core_id", "1"),
                ("core_siblings", "ffff,0000ffff"),
                ("core_siblings_list", "0-15,32-47"),
                ("physical_package_id", "0"),
                ("thread_siblings", "0002,00000002"),
                ("thread_siblings_list", "1,33"),
            ],
        );
        fs.add_attributes(
            format!("{}/cpu1/thermal_throttle", CPU_DIR),
            &[("core_throttle_count", "30"), ("package_throttle_count", "45")],
        );

        // IBM POWER8
        fs.add_attributes(
            format!("{}/cpu8/cpufreq", CPU_DIR),
            &[
                ("affected_cpus", "8 9 10 11 12 13 14 15"),
                ("cpuinfo_cur_freq", "3690000"),
                ("cpuinfo_max_freq", "3690000"),
                ("cpuinfo_min_freq", "2061000"),
                ("cpuinfo_transition_latency", "0"),
                ("related_cpus", "8 9 10 11 12 13 14 15"),
                ("scaling_available_governors", "ondemand performance"),
                ("scaling_cur_freq", "3690000"),
                ("scaling_driver", "powernv-cpufreq"),
                ("scaling_governor", "ondemand"),
                ("scaling_max_freq", "3690000"),
                ("scaling_min_freq", "2061000"),
                ("scaling_setspeed", "<unsupported>"),
            ],
        );
        fs.add_file(
            format!("{}/cpu8/cpufreq/stats/total_trans", CPU_DIR),
            "1337\n",
        );
        fs.add_attributes(
            format!("{}/cpu8/topology", CPU_DIR),
            &[
                ("core_id", "48"),
                ("core_siblings", "00000000,00000000,00000000,0303030303"),
                ("core_siblings_list", "0-1,8-9,16-17,24-25,32-33"),
                ("physical_package_id", "0"),
                ("thread_siblings", "00000000,00000000,00000000,0000ff00"),
                ("thread_siblings_list", "8-15"),
            ],
        );

        fs
    }

    /// `/proc/zoneinfo` of a single-node x86_64 machine, abridged.
    pub fn single_node_procfs() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/zoneinfo",
            "\
Node 0, zone      DMA
  per-node stats
      nr_inactive_anon 230981
      nr_active_anon 547580
  pages free     2604
        min      8
        low      11
        high     14
        spanned  4095
        present  3997
        managed  3973
    nr_free_pages 2604
  pagesets
    cpu: 0
              count: 0
              high:  0
              batch: 1
  node_unreclaimable:  0
  start_pfn:           1
Node 0, zone    DMA32
  pages free     204252
        min      19510
        low      21059
        high     22608
    nr_free_pages 204252
  start_pfn:           4096
Node 0, zone   Normal
  pages free     18553
        min      11176
        low      13842
        high     16508
    nr_free_pages 18553
  start_pfn:           1048576
Node 0, zone  Movable
  pages free     0
        min      0
        low      0
        high     0
        spanned  0
        present  0
        managed  0
",
        );
        fs
    }
}
