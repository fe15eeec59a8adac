//! Integration tests for Microperf
//!
//! Library-level checks of the kernels and the registered suite, plus
//! end-to-end runs of the `microperf` binary.

use microperf::{
    SUITE_ORDER, fib, mandelperf, parse_hex, parse_int, pisum, quicksort, randmatmul,
    randmatstat, registered_benchmarks, to_hex,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::Command;

fn microperf() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_microperf"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The kernel oracles hold when called through the public API
#[test]
fn test_kernel_oracles() {
    assert_eq!(fib(20), 6765);
    assert_eq!(mandelperf().iter().sum::<u32>(), 14304);
    assert!((pisum() - 1.644834071848065).abs() < 1e-6);
}

/// Hex round trips hold for seeded random input
#[test]
fn test_parse_int_seeded() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    parse_int(&mut rng, 10_000).unwrap();

    for value in [0, 1, 0xff, u32::MAX] {
        assert_eq!(parse_hex(&to_hex(value)).unwrap(), value);
    }
}

/// Quicksort produces a sorted permutation of random input
#[test]
fn test_quicksort_random_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut values: Vec<f64> = (0..4999).map(|_| rng.gen()).collect();
    let mut expected = values.clone();
    expected.sort_by(f64::total_cmp);

    quicksort(&mut values);

    assert_eq!(values, expected);
}

/// Random matrix statistics stay inside their documented bounds
#[test]
fn test_randmatstat_bounds() {
    for seed in [1, 2, 3] {
        let mut rng = StdRng::seed_from_u64(seed);
        let (s1, s2) = randmatstat(&mut rng, 1000).unwrap();
        assert!(s1 > 0.5 && s1 < 1.0, "seed {}: s1 = {}", seed, s1);
        assert!(s2 > 0.5 && s2 < 1.0, "seed {}: s2 = {}", seed, s2);
    }
}

#[test]
fn test_randmatmul_shape() {
    let mut rng = StdRng::seed_from_u64(5);
    let c = randmatmul(&mut rng, 64);
    assert_eq!(c.dim(), (64, 64));
    assert!(c.iter().all(|&x| x >= 0.0));
}

/// Every kernel is registered exactly once with a distinct position
#[test]
fn test_suite_registration() {
    let mut benches = registered_benchmarks();
    benches.sort_by_key(|b| b.order);

    let ids: Vec<_> = benches.iter().map(|b| b.id).collect();
    assert_eq!(ids, SUITE_ORDER);
}

/// With no arguments the binary prints one perf line per kernel, in order,
/// whatever config files sit around the working directory
#[test]
fn test_default_run_output() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("microperf.toml"),
        "[runner]\nsamples = \"many\"\n[output]\nlabel = \"ruby\"\n",
    )
    .unwrap();
    let nested = root.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let output = microperf().current_dir(&nested).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), SUITE_ORDER.len(), "stdout: {}", stdout);

    for (line, name) in lines.iter().zip(SUITE_ORDER) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3, "line: {}", line);
        assert_eq!(fields[0], "python");
        assert_eq!(fields[1], name);
        let ms: f64 = fields[2].parse().unwrap();
        assert!(ms >= 0.0 && ms.is_finite());
    }
}

#[test]
fn test_filtered_json_report() {
    let output = microperf()
        .args(["^fib$", "--format", "json", "-n", "3", "--label", "rust"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["meta"]["label"], "rust");
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "fib");
    assert_eq!(results[0]["samples_ns"].as_array().unwrap().len(), 3);
}

#[test]
fn test_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("results.csv");

    let output = microperf()
        .args(["^pi_sum$", "--format", "csv", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "language,benchmark,min_ms,samples_ms");
    assert!(lines[1].starts_with("python,pi_sum,"));
}

#[test]
fn test_list_and_config_subcommands() {
    let list = microperf().arg("list").output().unwrap();
    assert!(list.status.success());
    let stdout = String::from_utf8(list.stdout).unwrap();
    assert!(stdout.contains("7 benchmarks found."));

    let config = microperf().arg("config").output().unwrap();
    assert!(config.status.success());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("microperf.toml");
    std::fs::write(&path, &config.stdout).unwrap();
    let parsed = microperf::MicroperfConfig::load(&path).unwrap();
    assert_eq!(parsed.runner.samples, 5);
    assert_eq!(parsed.output.label, "python");
}

#[test]
fn test_named_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    std::fs::write(
        &path,
        "[runner]\nsamples = 2\n[output]\nformat = \"csv\"\nlabel = \"ruby\"\n",
    )
    .unwrap();

    let output = microperf()
        .args(["^fib$", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "language,benchmark,min_ms,samples_ms");
    assert!(lines[1].starts_with("ruby,fib,"));
    assert_eq!(lines[1].rsplit(',').next().unwrap().split(';').count(), 2);

    std::fs::write(&path, "[runner]\nsamples = \"many\"\n").unwrap();
    let broken = microperf().arg("--config").arg(&path).output().unwrap();
    assert_eq!(broken.status.code(), Some(1));
    assert!(broken.stdout.is_empty());
    assert!(String::from_utf8_lossy(&broken.stderr).contains("bench.toml"));
}

#[test]
fn test_invalid_filter_fails() {
    let output = microperf().arg("(").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: invalid benchmark filter"));
}
