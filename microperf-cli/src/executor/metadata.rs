//! System Metadata Collection
//!
//! Git commit and branch, OS and architecture, CPU model and core count,
//! total memory. Linux-only sources (CPU model, memory) degrade to
//! "Unknown" or 0 elsewhere.

use chrono::Utc;
use microperf_report::{Report, ReportConfig, ReportMeta, SystemInfo};

use super::execution::ExecutionConfig;

/// Build report metadata including system info and git details
pub fn build_report_meta(label: &str, config: &ExecutionConfig) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
        memory_gb: get_memory_gb().unwrap_or(0.0),
    };

    ReportMeta {
        schema_version: Report::SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        label: label.to_string(),
        timestamp: Utc::now(),
        git_commit: git(&["rev-parse", "HEAD"]),
        git_branch: git(&["rev-parse", "--abbrev-ref", "HEAD"]),
        system,
        config: ReportConfig {
            samples: config.samples,
            pinned_cpu: config.pin_cpu,
        },
    }
}

/// Trimmed stdout of a successful git invocation
fn git(args: &[&str]) -> Option<String> {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

/// Get total system memory in GB (Linux only)
fn get_memory_gb() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/meminfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("MemTotal"))
                    .and_then(|l| {
                        l.split_whitespace()
                            .nth(1)
                            .and_then(|s| s.parse::<u64>().ok())
                    })
                    .map(|kb| kb as f64 / 1024.0 / 1024.0)
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_carries_label_and_config() {
        let config = ExecutionConfig {
            samples: 7,
            pin_cpu: Some(1),
            show_progress: false,
        };

        let meta = build_report_meta("rust", &config);

        assert_eq!(meta.label, "rust");
        assert_eq!(meta.config.samples, 7);
        assert_eq!(meta.config.pinned_cpu, Some(1));
        assert!(meta.system.cpu_cores >= 1);
        assert!(meta.git_commit.as_deref().map_or(true, |c| !c.is_empty()));
    }
}
