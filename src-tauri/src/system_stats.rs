use sysinfo::{CpuRefreshKind, System};

use crate::SystemStats;

/// Live host metrics. `None` means the OS could not provide the value.
pub(crate) trait HostMetrics {
    fn memory(&self) -> Option<(u64, u64)>;
    fn load_average(&self) -> Option<[f64; 3]>;
    fn logical_cores(&self) -> Option<usize>;
}

pub(crate) struct SysinfoMetrics;

impl HostMetrics for SysinfoMetrics {
    fn memory(&self) -> Option<(u64, u64)> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let mut system = System::new();
        system.refresh_memory();
        Some((system.total_memory(), system.available_memory()))
    }

    fn load_average(&self) -> Option<[f64; 3]> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let load = System::load_average();
        Some([load.one, load.five, load.fifteen])
    }

    fn logical_cores(&self) -> Option<usize> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let mut system = System::new();
        system.refresh_cpu_list(CpuRefreshKind::nothing());
        Some(system.cpus().len())
    }
}

fn sanitize_load(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub(crate) fn collect_system_stats<M: HostMetrics>(metrics: &M, platform: String) -> SystemStats {
    let (total_mem, free_mem) = metrics.memory().unwrap_or((0, 0));
    let [load1, load5, load15] = metrics.load_average().unwrap_or([0.0; 3]);
    let cores = metrics.logical_cores().filter(|cores| *cores > 0).unwrap_or(1);

    SystemStats {
        total_mem,
        free_mem: free_mem.min(total_mem),
        load1: sanitize_load(load1),
        load5: sanitize_load(load5),
        load15: sanitize_load(load15),
        cores,
        platform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnavailableMetrics;

    impl HostMetrics for UnavailableMetrics {
        fn memory(&self) -> Option<(u64, u64)> {
            None
        }

        fn load_average(&self) -> Option<[f64; 3]> {
            None
        }

        fn logical_cores(&self) -> Option<usize> {
            None
        }
    }

    struct FixedMetrics;

    impl HostMetrics for FixedMetrics {
        fn memory(&self) -> Option<(u64, u64)> {
            Some((16 * 1024, 4 * 1024))
        }

        fn load_average(&self) -> Option<[f64; 3]> {
            Some([1.5, f64::NAN, -2.0])
        }

        fn logical_cores(&self) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn unavailable_metrics_fall_back_to_defaults() {
        let stats = collect_system_stats(&UnavailableMetrics, "linux".to_string());
        assert_eq!(stats.total_mem, 0);
        assert_eq!(stats.free_mem, 0);
        assert_eq!([stats.load1, stats.load5, stats.load15], [0.0, 0.0, 0.0]);
        assert_eq!(stats.cores, 1);
        assert_eq!(stats.platform, "linux");
    }

    #[test]
    fn odd_metric_values_are_sanitized() {
        let stats = collect_system_stats(&FixedMetrics, "darwin".to_string());
        assert_eq!(stats.total_mem, 16 * 1024);
        assert_eq!(stats.free_mem, 4 * 1024);
        assert_eq!(stats.load1, 1.5);
        assert_eq!(stats.load5, 0.0);
        assert_eq!(stats.load15, 0.0);
        assert_eq!(stats.cores, 1);
    }

    #[test]
    fn live_metrics_respect_invariants() {
        let stats = collect_system_stats(&SysinfoMetrics, "test".to_string());
        assert!(stats.cores >= 1);
        assert!(stats.free_mem <= stats.total_mem);
        assert!(stats.load1 >= 0.0 && stats.load5 >= 0.0 && stats.load15 >= 0.0);
    }

    #[test]
    fn stats_serialize_with_ui_field_names() {
        let stats = collect_system_stats(&UnavailableMetrics, "win32".to_string());
        let value = serde_json::to_value(&stats).expect("serialize stats");
        for key in ["totalMem", "freeMem", "load1", "load5", "load15", "cores", "platform"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
