//! Benchmark Executor
//!
//! ```text
//! BenchmarkDef (registered via inventory::submit!)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Oracle, timed runs, minimum sample
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Report with system metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! - [`execution`] - Sequential in-process execution
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;

pub use execution::{BenchExecutionResult, ExecutionConfig, Executor};
pub use formatting::format_human_output;
pub use report::build_report;
