#![warn(missing_docs)]
//! Microperf Core - Timing Runtime
//!
//! This crate provides the pieces every benchmark routine touches:
//! - `Bencher` for collecting one timed sample per kernel invocation
//! - Wall-clock plus cycle-counter timing
//! - CPU affinity pinning
//! - The `BenchmarkDef` registry that the suite submits to

mod bencher;
mod measure;

pub use bencher::{Bencher, BenchmarkResult, DEFAULT_SAMPLE_COUNT, Sample, run_benchmark_loop};
/// Whether this target has a hardware cycle counter; when `false` every
/// `Sample::cpu_cycles` is 0.
pub use measure::HAS_CYCLE_COUNTER;
pub use measure::{Instant, Timer, pin_to_cpu};

/// Failure raised by an oracle check or a timed routine.
///
/// Every variant is fatal: the driver stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A kernel produced output outside its expected value or range
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// A kernel reported an error of its own
    #[error(transparent)]
    Kernel(Box<dyn std::error::Error + Send + Sync>),
    /// The routine returned without timing anything
    #[error("benchmark routine returned without recording a sample")]
    NoSample,
}

/// Return `BenchError::Assertion` with a lazily built message unless `cond` holds.
pub fn ensure(cond: bool, message: impl FnOnce() -> String) -> Result<(), BenchError> {
    if cond {
        Ok(())
    } else {
        Err(BenchError::Assertion(message()))
    }
}

/// Benchmark definition registered with `inventory::submit!`
#[derive(Debug, Clone)]
pub struct BenchmarkDef {
    /// Name printed in the output line (`fib`, `parse_int`, ...)
    pub id: &'static str,
    /// One-line description for `list`
    pub description: &'static str,
    /// Position in the fixed run order
    pub order: u32,
    /// Per-benchmark sample count (None = global setting)
    pub samples: Option<usize>,
    /// Untimed correctness check run once before measuring
    pub oracle_fn: Option<fn() -> Result<(), BenchError>>,
    /// Timed routine; each call records one sample
    pub runner_fn: fn(&mut Bencher) -> Result<(), BenchError>,
    /// Source file path
    pub file: &'static str,
    /// Source line number
    pub line: u32,
}

inventory::collect!(BenchmarkDef);

/// All registered benchmarks, in discovery order
pub fn registered_benchmarks() -> Vec<&'static BenchmarkDef> {
    inventory::iter::<BenchmarkDef>.into_iter().collect()
}

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<BenchmarkDef> {}
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure() {
        assert!(ensure(true, || unreachable!()).is_ok());

        let err = ensure(1 + 1 == 3, || "arithmetic".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "assertion failed: arithmetic");
    }

    #[test]
    fn test_kernel_error_is_transparent() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "inner cause");
        let err = BenchError::Kernel(Box::new(inner));
        assert_eq!(err.to_string(), "inner cause");
    }
}
