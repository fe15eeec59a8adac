//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn test_json_round_trip_keeps_samples() {
        let report = fixtures::report(vec![fixtures::result("quicksort", 400)]);
        let json = generate_json_report(&report).unwrap();

        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results[0].samples_ns, vec![420, 400, 410]);
        assert_eq!(parsed.meta.label, "python");
    }
}
