//! The Benchmark Suite
//!
//! Registers the seven kernels with the `BenchmarkDef` inventory. Each entry
//! pairs an optional untimed oracle with a timed routine that records one
//! sample per call. `order` fixes the output order regardless of the order
//! in which the linker lays out the registrations.
//!
//! Randomness comes from `rand::thread_rng()`; the suite is single-threaded,
//! so that generator is effectively process-wide and is never reseeded.

use crate::{
    FIB_ARG, FIB_EXPECTED, MANDEL_EXPECTED_SUM, PARSE_INT_ITERATIONS, PISUM_EXPECTED,
    PISUM_TOLERANCE, QSORT_LEN, RANDMATMUL_DIM, RANDMATSTAT_BOUNDS, RANDMATSTAT_TRIALS, fib,
    mandelperf, parse_int, pisum, qsort_kernel, quicksort, random_list, randmatmul, randmatstat,
};
use microperf_core::{BenchError, Bencher, BenchmarkDef, ensure};
use rand::thread_rng;
use std::hint::black_box;

/// Benchmark names in run order
pub const SUITE_ORDER: [&str; 7] = [
    "fib",
    "parse_int",
    "mandel",
    "quicksort",
    "pi_sum",
    "rand_mat_stat",
    "rand_mat_mul",
];

// ---------------------------------------------------------------------------
// fib
// ---------------------------------------------------------------------------

fn fib_oracle() -> Result<(), BenchError> {
    let value = fib(FIB_ARG);
    ensure(value == FIB_EXPECTED, || {
        format!("fib({}) = {}, expected {}", FIB_ARG, value, FIB_EXPECTED)
    })
}

fn bench_fib(b: &mut Bencher) -> Result<(), BenchError> {
    b.iter(|| fib(black_box(FIB_ARG)));
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "fib",
        description: "doubly recursive Fibonacci of 20",
        order: 0,
        samples: None,
        oracle_fn: Some(fib_oracle),
        runner_fn: bench_fib,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// parse_int
// ---------------------------------------------------------------------------

// The round-trip check runs inside the timed region.
fn bench_parse_int(b: &mut Bencher) -> Result<(), BenchError> {
    let mut rng = thread_rng();
    b.try_iter(|| parse_int(&mut rng, PARSE_INT_ITERATIONS))?;
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "parse_int",
        description: "999 random u32 -> hex text -> u32 round trips",
        order: 1,
        samples: None,
        oracle_fn: None,
        runner_fn: bench_parse_int,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// mandel
// ---------------------------------------------------------------------------

fn mandel_oracle() -> Result<(), BenchError> {
    let total: u32 = mandelperf().iter().sum();
    ensure(total == MANDEL_EXPECTED_SUM, || {
        format!(
            "sum(mandelperf()) = {}, expected {}",
            total, MANDEL_EXPECTED_SUM
        )
    })
}

fn bench_mandel(b: &mut Bencher) -> Result<(), BenchError> {
    b.iter(mandelperf);
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "mandel",
        description: "Mandelbrot escape times over a 25x20 grid",
        order: 2,
        samples: None,
        oracle_fn: Some(mandel_oracle),
        runner_fn: bench_mandel,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// quicksort
// ---------------------------------------------------------------------------

fn quicksort_oracle() -> Result<(), BenchError> {
    let input = random_list(&mut thread_rng(), QSORT_LEN);

    let mut sorted = input.clone();
    quicksort(&mut sorted);

    let mut expected = input;
    expected.sort_by(f64::total_cmp);
    ensure(sorted == expected, || {
        "qsort_kernel output is not a sorted permutation of its input".to_string()
    })
}

// List generation happens in the setup closure, outside the timed region.
fn bench_quicksort(b: &mut Bencher) -> Result<(), BenchError> {
    let mut rng = thread_rng();
    b.iter_with_setup(
        || random_list(&mut rng, QSORT_LEN),
        |mut list| {
            let hi = list.len() - 1;
            qsort_kernel(&mut list, 0, hi);
            list
        },
    );
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "quicksort",
        description: "in-place quicksort of 4999 uniform floats",
        order: 3,
        samples: None,
        oracle_fn: Some(quicksort_oracle),
        runner_fn: bench_quicksort,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// pi_sum
// ---------------------------------------------------------------------------

fn pisum_oracle() -> Result<(), BenchError> {
    let sum = pisum();
    ensure((sum - PISUM_EXPECTED).abs() < PISUM_TOLERANCE, || {
        format!(
            "pisum() = {}, expected {} within {}",
            sum, PISUM_EXPECTED, PISUM_TOLERANCE
        )
    })
}

fn bench_pisum(b: &mut Bencher) -> Result<(), BenchError> {
    b.iter(pisum);
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "pi_sum",
        description: "sum of 1/k^2 for k < 10000, repeated 499 times",
        order: 4,
        samples: None,
        oracle_fn: Some(pisum_oracle),
        runner_fn: bench_pisum,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// rand_mat_stat
// ---------------------------------------------------------------------------

fn randmatstat_oracle() -> Result<(), BenchError> {
    let (s1, s2) = randmatstat(&mut thread_rng(), RANDMATSTAT_TRIALS)?;
    let (lo, hi) = RANDMATSTAT_BOUNDS;
    ensure(s1 > lo && s1 < hi && s2 > lo && s2 < hi, || {
        format!(
            "randmatstat({}) = ({}, {}), expected both in ({}, {})",
            RANDMATSTAT_TRIALS, s1, s2, lo, hi
        )
    })
}

fn bench_randmatstat(b: &mut Bencher) -> Result<(), BenchError> {
    let mut rng = thread_rng();
    b.try_iter(|| randmatstat(&mut rng, RANDMATSTAT_TRIALS))?;
    Ok(())
}

inventory::submit! {
    BenchmarkDef {
        id: "rand_mat_stat",
        description: "trace statistics of random 5x5 block matrices, 1000 trials",
        order: 5,
        samples: None,
        oracle_fn: Some(randmatstat_oracle),
        runner_fn: bench_randmatstat,
        file: file!(),
        line: line!(),
    }
}

// ---------------------------------------------------------------------------
// rand_mat_mul
// ---------------------------------------------------------------------------

// The sign check on C[0,0] runs inside the timed region.
fn bench_randmatmul(b: &mut Bencher) -> Result<(), BenchError> {
    let mut rng = thread_rng();
    b.try_iter(|| {
        let c = randmatmul(&mut rng, RANDMATMUL_DIM);
        let corner = c[[0, 0]];
        ensure(corner >= 0.0, || format!("C[0,0] = {} is negative", corner))
    })
}

inventory::submit! {
    BenchmarkDef {
        id: "rand_mat_mul",
        description: "product of two random 1000x1000 matrices",
        order: 6,
        samples: None,
        oracle_fn: None,
        runner_fn: bench_randmatmul,
        file: file!(),
        line: line!(),
    }
}
