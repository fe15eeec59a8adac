//! Scalar Kernels
//!
//! `fib` and `pisum` exercise plain function calls and floating-point
//! accumulation. Their cost is the benchmark, so neither is memoized or
//! vectorized by hand.

use std::hint::black_box;

/// Argument used by the `fib` benchmark
pub const FIB_ARG: u32 = 20;
/// `fib(FIB_ARG)`
pub const FIB_EXPECTED: u64 = 6765;

/// Number of series terms summed by `pisum` (k = 1..=9999)
pub const PISUM_TERMS: u32 = 9999;
/// Number of times the series is re-summed
pub const PISUM_REPEATS: u32 = 499;
/// Partial sum of 1/k² over `PISUM_TERMS` terms
pub const PISUM_EXPECTED: f64 = 1.644834071848065;
/// Accepted distance from `PISUM_EXPECTED`
pub const PISUM_TOLERANCE: f64 = 1e-6;

/// Naive doubly recursive Fibonacci: `fib(0) = 0`, `fib(1) = 1`.
pub fn fib(n: u32) -> u64 {
    if n < 2 {
        n as u64
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Sum 1/k² for k in 1..=9999, repeated 499 times; returns the last sum.
pub fn pisum() -> f64 {
    let mut sum = 0.0;
    for _ in 0..PISUM_REPEATS {
        // black_box keeps the repetitions from being folded into one pass
        sum = black_box(0.0);
        for k in 1..=PISUM_TERMS {
            let k = f64::from(k);
            sum += 1.0 / (k * k);
        }
    }
    sum
}
