//! Microperf Report - Output Formats
//!
//! - `perf` lines (`python,<benchmark>,<min_ms>`), the default
//! - JSON (machine-readable, full metadata and samples)
//! - CSV (spreadsheet-compatible)
//!
//! The human-readable table lives in the CLI crate next to the executor.

mod csv;
mod json;
mod perf;
mod report;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use perf::{format_millis, format_perf_line, generate_perf_report};
pub use report::{
    BenchmarkReportResult, Report, ReportConfig, ReportMeta, ReportSummary, SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `label,benchmark,min_ms` line per kernel
    #[default]
    Perf,
    /// JSON with full metadata
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perf" | "lines" => Ok(OutputFormat::Perf),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
