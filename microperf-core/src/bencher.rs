//! Bencher - The Sample Collection API
//!
//! A benchmark routine receives a `Bencher` and calls one of the `iter*`
//! methods once per run. Each call times exactly one kernel invocation and
//! records it as one sample; nothing is batched or averaged. The driver
//! keeps calling the routine until the target sample count is reached and
//! then reports the fastest sample.

use crate::BenchError;
use crate::measure::Timer;

/// Number of timed runs per kernel
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// One timed kernel invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Wall-clock duration in nanoseconds
    pub duration_nanos: u64,
    /// Raw cycle counter delta (0 where no counter exists)
    pub cpu_cycles: u64,
}

impl Sample {
    /// Duration in milliseconds, the unit of the `perf` output line
    pub fn millis(&self) -> f64 {
        self.duration_nanos as f64 / 1_000_000.0
    }
}

/// Samples collected for one benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Samples in the order they were taken
    pub samples: Vec<Sample>,
    /// Total time spent inside timed regions
    pub total_time_ns: u64,
}

impl BenchmarkResult {
    /// The fastest sample; `None` when nothing was recorded
    pub fn min_sample(&self) -> Option<Sample> {
        self.samples.iter().copied().min_by_key(|s| s.duration_nanos)
    }
}

/// Collects one sample per `iter*` call until the target count is reached.
pub struct Bencher {
    samples: Vec<Sample>,
    target_samples: usize,
}

impl Bencher {
    /// Create a bencher targeting [`DEFAULT_SAMPLE_COUNT`] samples
    pub fn new() -> Self {
        Self::with_samples(DEFAULT_SAMPLE_COUNT)
    }

    /// Create a bencher with a custom sample target (at least 1)
    pub fn with_samples(target_samples: usize) -> Self {
        let target_samples = target_samples.max(1);
        Self {
            samples: Vec::with_capacity(target_samples),
            target_samples,
        }
    }

    /// Time one call of `f`.
    #[inline]
    pub fn iter<T, F>(&mut self, mut f: F)
    where
        F: FnMut() -> T,
    {
        let timer = Timer::start();
        let _ = std::hint::black_box(f());
        self.samples.push(timer.stop());
    }

    /// Build the input with `setup` outside the timed region, then time `routine`.
    ///
    /// The routine's output is dropped after the timer stops, so teardown is
    /// not measured either.
    #[inline]
    pub fn iter_with_setup<T, S, F, R>(&mut self, mut setup: S, mut routine: F)
    where
        S: FnMut() -> T,
        F: FnMut(T) -> R,
    {
        let input = setup();

        let timer = Timer::start();
        let output = std::hint::black_box(routine(input));
        let sample = timer.stop();

        drop(output);
        self.samples.push(sample);
    }

    /// Time one call of a fallible routine.
    ///
    /// Checks that live inside the routine are part of the timed region. On
    /// failure no sample is recorded and the error is handed back unchanged.
    #[inline]
    pub fn try_iter<T, E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let timer = Timer::start();
        let result = std::hint::black_box(f());
        let sample = timer.stop();

        result?;
        self.samples.push(sample);
        Ok(())
    }

    /// Whether the target sample count has been reached
    pub fn has_enough_samples(&self) -> bool {
        self.samples.len() >= self.target_samples
    }

    /// Samples recorded so far
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Target sample count
    pub fn target_samples(&self) -> usize {
        self.target_samples
    }

    /// Finalize and return the collected samples
    pub fn finish(self) -> BenchmarkResult {
        let total_time_ns = self.samples.iter().map(|s| s.duration_nanos).sum();
        BenchmarkResult {
            samples: self.samples,
            total_time_ns,
        }
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}

/// Call `runner_fn` until the bencher holds its target number of samples.
///
/// The first error aborts the loop. A runner call that records no sample is
/// reported as [`BenchError::NoSample`] instead of spinning forever.
pub fn run_benchmark_loop<F>(
    mut bencher: Bencher,
    mut runner_fn: F,
) -> Result<BenchmarkResult, BenchError>
where
    F: FnMut(&mut Bencher) -> Result<(), BenchError>,
{
    while !bencher.has_enough_samples() {
        let before = bencher.samples.len();
        runner_fn(&mut bencher)?;
        if bencher.samples.len() == before {
            return Err(BenchError::NoSample);
        }
    }

    Ok(bencher.finish())
}
