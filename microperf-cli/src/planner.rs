//! Benchmark Planner
//!
//! Filters registered benchmarks by a regex on their name and orders them by
//! their declared position, so link order never changes the output order.

use microperf_core::BenchmarkDef;
use regex::Regex;

/// Execution plan for benchmarks
pub struct ExecutionPlan {
    /// Ordered list of benchmarks to run
    pub benchmarks: Vec<&'static BenchmarkDef>,
}

/// Build execution plan from discovered benchmarks
pub fn build_plan(
    benchmarks: impl IntoIterator<Item = &'static BenchmarkDef>,
    filter: Option<&Regex>,
) -> ExecutionPlan {
    let mut selected: Vec<_> = benchmarks
        .into_iter()
        .filter(|b| filter.map_or(true, |re| re.is_match(b.id)))
        .collect();

    selected.sort_by_key(|b| (b.order, b.id));

    ExecutionPlan {
        benchmarks: selected,
    }
}
