//! Benchmark Execution
//!
//! Runs benchmarks one after another in the current process.
//!
//! ```text
//! BenchmarkDef (from inventory)
//!        │
//!        ▼
//!   oracle_fn (untimed, once)
//!        │
//!        ▼
//!   run_benchmark_loop ── runner_fn × samples
//!        │
//!        ▼
//!  BenchExecutionResult ──► result sink (streams the perf line)
//! ```
//!
//! The first failure stops the run: later benchmarks are never started and
//! the error carries the name of the benchmark that failed.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use microperf_core::{
    BenchError, Bencher, BenchmarkDef, DEFAULT_SAMPLE_COUNT, Sample, run_benchmark_loop,
};
use std::time::Instant;

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Timed runs per benchmark unless the benchmark sets its own
    pub samples: usize,
    /// Core the process was asked to run on
    pub pin_cpu: Option<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl ExecutionConfig {
    /// Sample count for one benchmark; a per-benchmark value wins.
    pub fn samples_for(&self, bench: &BenchmarkDef) -> usize {
        bench.samples.unwrap_or(self.samples)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            pin_cpu: None,
            show_progress: false,
        }
    }
}

/// Result from executing a single benchmark
#[derive(Debug, Clone)]
pub struct BenchExecutionResult {
    /// Registered benchmark name
    pub benchmark_id: String,
    /// One-line summary of the kernel
    pub description: String,
    /// Source file of the registration
    pub file: String,
    /// Source line of the registration
    pub line: u32,
    /// Samples in the order they were taken
    pub samples: Vec<Sample>,
    /// Fastest sample
    pub min: Sample,
    /// Wall time including the oracle and untimed setup
    pub duration_ns: u64,
}

/// Execute benchmarks and produce results (in-process, sequential)
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Create an executor with the given settings
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Execute all provided benchmarks in order.
    ///
    /// `on_result` sees each result as soon as its benchmark finishes.
    pub fn execute<F>(
        &self,
        benchmarks: &[&BenchmarkDef],
        mut on_result: F,
    ) -> anyhow::Result<Vec<BenchExecutionResult>>
    where
        F: FnMut(&BenchExecutionResult) -> anyhow::Result<()>,
    {
        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(benchmarks.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut results = Vec::with_capacity(benchmarks.len());
        for bench in benchmarks {
            pb.set_message(bench.id);
            let result = match self.execute_single(bench) {
                Ok(result) => result,
                Err(e) => {
                    pb.abandon_with_message(format!("{} failed", bench.id));
                    return Err(e).with_context(|| format!("benchmark `{}` failed", bench.id));
                }
            };
            on_result(&result)?;
            results.push(result);
            pb.inc(1);
        }

        pb.finish_with_message("Complete");
        Ok(results)
    }

    /// Execute a single benchmark: oracle first, then the timed runs
    pub fn execute_single(&self, bench: &BenchmarkDef) -> Result<BenchExecutionResult, BenchError> {
        let start = Instant::now();

        if let Some(oracle) = bench.oracle_fn {
            tracing::info!(benchmark = bench.id, "checking oracle");
            oracle()?;
        }

        let target = self.config.samples_for(bench);
        tracing::info!(benchmark = bench.id, samples = target, "measuring");
        let result = run_benchmark_loop(Bencher::with_samples(target), bench.runner_fn)?;

        for (index, sample) in result.samples.iter().enumerate() {
            tracing::debug!(
                benchmark = bench.id,
                index,
                nanos = sample.duration_nanos,
                cycles = sample.cpu_cycles,
                "sample"
            );
        }

        let min = result.min_sample().ok_or(BenchError::NoSample)?;

        Ok(BenchExecutionResult {
            benchmark_id: bench.id.to_string(),
            description: bench.description.to_string(),
            file: bench.file.to_string(),
            line: bench.line,
            samples: result.samples,
            min,
            duration_ns: start.elapsed().as_nanos() as u64,
        })
    }
}
