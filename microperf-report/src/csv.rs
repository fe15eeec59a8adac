//! CSV Output

use crate::perf::format_millis;
use crate::report::Report;

/// One row per benchmark: label, name, minimum in ms, then every sample in ms
/// joined with `;`.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from("language,benchmark,min_ms,samples_ms\n");

    for result in &report.results {
        let samples: Vec<String> = result
            .samples_ns
            .iter()
            .map(|ns| format_millis(*ns as f64 / 1_000_000.0))
            .collect();
        output.push_str(&format!(
            "{},{},{},{}\n",
            report.meta.label,
            result.id,
            format_millis(result.min_ms),
            samples.join(";")
        ));
    }

    output
}
