//! Report Building

use super::execution::{BenchExecutionResult, ExecutionConfig};
use super::metadata::build_report_meta;
use microperf_report::{BenchmarkReportResult, Report, ReportSummary};

/// Build a complete Report from execution results
pub fn build_report(
    results: &[BenchExecutionResult],
    config: &ExecutionConfig,
    label: &str,
    total_duration_ms: f64,
) -> Report {
    let results: Vec<BenchmarkReportResult> = results
        .iter()
        .map(|r| BenchmarkReportResult {
            id: r.benchmark_id.clone(),
            description: r.description.clone(),
            file: r.file.clone(),
            line: r.line,
            min_ns: r.min.duration_nanos,
            min_ms: r.min.millis(),
            min_cycles: r.min.cpu_cycles,
            samples_ns: r.samples.iter().map(|s| s.duration_nanos).collect(),
            duration_ms: r.duration_ns as f64 / 1_000_000.0,
        })
        .collect();

    Report {
        meta: build_report_meta(label, config),
        summary: ReportSummary {
            total_benchmarks: results.len(),
            total_duration_ms,
        },
        results,
    }
}
