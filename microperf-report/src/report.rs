//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub results: Vec<BenchmarkReportResult>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    /// Language label written in front of every `perf` line
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub git_commit: Option<String>,
    pub git_branch: Option<String>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Execution settings captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub samples: usize,
    pub pinned_cpu: Option<usize>,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
    pub memory_gb: f64,
}

/// One benchmark's timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReportResult {
    pub id: String,
    pub description: String,
    pub file: String,
    pub line: u32,
    /// Fastest sample in nanoseconds
    pub min_ns: u64,
    /// Fastest sample in milliseconds (the reported figure)
    pub min_ms: f64,
    /// Cycle count of the fastest sample (0 without a cycle counter)
    pub min_cycles: u64,
    /// Every sample in nanoseconds, in the order taken
    pub samples_ns: Vec<u64>,
    /// Wall-clock time for the whole benchmark including oracle and setup
    pub duration_ms: f64,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_benchmarks: usize,
    pub total_duration_ms: f64,
}

impl Report {
    /// Current schema version written to `meta.schema_version`
    pub const SCHEMA_VERSION: u32 = 1;

    /// Look up a result by benchmark name
    pub fn result(&self, id: &str) -> Option<&BenchmarkReportResult> {
        self.results.iter().find(|r| r.id == id)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn test_result_lookup() {
        let report = fixtures::report(vec![
            fixtures::result("fib", 100),
            fixtures::result("mandel", 200),
        ]);
        assert_eq!(report.result("mandel").unwrap().min_ns, 200);
        assert!(report.result("missing").is_none());
    }
}
