#![warn(missing_docs)]
//! # Microperf
//!
//! Cross-language micro-benchmark suite. Seven small numeric kernels are
//! each run five times and the fastest run is printed as
//!
//! ```text
//! python,<benchmark>,<min_ms>
//! ```
//!
//! so the numbers line up with the same suite written in other languages.
//!
//! | benchmark | kernel |
//! |---|---|
//! | `fib` | recursive Fibonacci of 20 |
//! | `parse_int` | 999 hex render/parse round trips |
//! | `mandel` | escape-time counts over a 25 × 20 grid |
//! | `quicksort` | Hoare-partition quicksort of 4999 floats |
//! | `pi_sum` | 499 repetitions of Σ 1/k² for k < 10000 |
//! | `rand_mat_stat` | coefficient of variation of trace((PᵀP)⁴), trace((QᵀQ)⁴) |
//! | `rand_mat_mul` | product of two 1000 × 1000 uniform matrices |
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = microperf::run() {
//!         eprintln!("Error: {:#}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

// Re-export core types
pub use microperf_core::{
    BenchError, Bencher, BenchmarkDef, BenchmarkResult, Sample, ensure, registered_benchmarks,
};

// Re-export the kernels
pub use microperf_kernels::{
    Complex, KernelError, fib, mandel, mandelperf, parse_hex, parse_int, pisum, qsort_kernel,
    quicksort, randmatmul, randmatstat, suite::SUITE_ORDER, to_hex,
};

// Re-export report types
pub use microperf_report::{OutputFormat, Report};

pub use microperf_cli::{Cli, MicroperfConfig, run, run_with_cli};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchError, Bencher, BenchmarkDef, ensure};
}
