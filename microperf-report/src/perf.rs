//! Perf Line Output
//!
//! `<label>,<benchmark>,<min_ms>` with the milliseconds printed the way a
//! Python float prints: shortest round-trip digits, `12.0` for a whole value
//! and an exponent below `1e-4` or from `1e16` up. This is the format the
//! cross-language collection scripts parse, so it carries nothing else.

use crate::report::Report;

/// Format one output line (no trailing newline).
pub fn format_perf_line(label: &str, benchmark: &str, min_ms: f64) -> String {
    format!("{},{},{}", label, benchmark, format_millis(min_ms))
}

/// Shortest round-trip rendering of `ms`, always with a decimal point or an
/// exponent.
pub fn format_millis(ms: f64) -> String {
    if !ms.is_finite() {
        return ms.to_string();
    }

    let magnitude = ms.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        // `{:e}` gives `1.5e-5`; pad the exponent to `1.5e-05`.
        let rendered = format!("{:e}", ms);
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => rendered,
        };
    }

    if ms.fract() == 0.0 {
        format!("{:.1}", ms)
    } else {
        ms.to_string()
    }
}

/// All result lines of a report, newline-terminated.
pub fn generate_perf_report(report: &Report) -> String {
    let mut output = String::new();
    for result in &report.results {
        output.push_str(&format_perf_line(&report.meta.label, &result.id, result.min_ms));
        output.push('\n');
    }
    output
}
