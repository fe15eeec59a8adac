#![warn(missing_docs)]
//! Microperf Kernels
//!
//! The seven numeric kernels of the cross-language suite, as plain
//! functions, plus their registration as benchmarks (`suite`).
//!
//! | benchmark | kernel | oracle |
//! |---|---|---|
//! | `fib` | [`fib`] | `fib(20) == 6765` |
//! | `parse_int` | [`parse_int`] | every hex round trip matches |
//! | `mandel` | [`mandelperf`] | counts sum to 14304 |
//! | `quicksort` | [`qsort_kernel`] | output is a sorted permutation |
//! | `pi_sum` | [`pisum`] | within 1e-6 of 1.644834071848065 |
//! | `rand_mat_stat` | [`randmatstat`] | both ratios in (0.5, 1.0) |
//! | `rand_mat_mul` | [`randmatmul`] | `C[0,0] >= 0` |
//!
//! Kernels that draw random numbers take the generator as an argument so
//! tests can seed it; the registered benchmarks pass `rand::thread_rng()`.

mod error;
mod mandel;
mod matrix;
mod parse;
mod scalar;
mod sort;
pub mod suite;

pub use error::KernelError;
pub use mandel::{Complex, MANDEL_EXPECTED_SUM, MANDEL_MAX_ITER, arange, mandel, mandelperf};
pub use matrix::{
    RANDMATMUL_DIM, RANDMATSTAT_BOUNDS, RANDMATSTAT_DIM, RANDMATSTAT_TRIALS, randmatmul,
    randmatstat, standard_normal_matrix, uniform_matrix,
};
pub use parse::{PARSE_INT_ITERATIONS, parse_hex, parse_int, to_hex};
pub use scalar::{
    FIB_ARG, FIB_EXPECTED, PISUM_EXPECTED, PISUM_REPEATS, PISUM_TERMS, PISUM_TOLERANCE, fib,
    pisum,
};
pub use sort::{QSORT_LEN, qsort_kernel, quicksort, random_list};
