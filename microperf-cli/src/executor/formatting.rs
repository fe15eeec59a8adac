//! Output Formatting
//!
//! Human-readable terminal output: one block per benchmark with the fastest
//! sample, the sample count, and cycle counts where the target has a
//! counter.

use microperf_report::Report;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("Microperf Results ({})\n", report.meta.label));
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let width = report
        .results
        .iter()
        .map(|r| r.id.len())
        .max()
        .unwrap_or(10);

    for result in &report.results {
        output.push_str(&format!(
            "  ✓ {:<width$}  min: {:>12.4} ms  ({} samples)\n",
            result.id,
            result.min_ms,
            result.samples_ns.len(),
            width = width
        ));
        if result.min_cycles > 0 {
            output.push_str(&format!(
                "    {:<width$}  cycles: {}\n",
                "",
                result.min_cycles,
                width = width
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "{} benchmarks in {:.1} ms on {} ({} cores)\n",
        report.summary.total_benchmarks,
        report.summary.total_duration_ms,
        report.meta.system.cpu,
        report.meta.system.cpu_cores
    ));

    output
}
