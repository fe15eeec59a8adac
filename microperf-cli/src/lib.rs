#![warn(missing_docs)]
//! Microperf CLI Library
//!
//! Drives the registered benchmarks: resolves settings from the command
//! line and an optional `--config` file, plans the run, executes each
//! benchmark and writes the report.
//!
//! With no arguments the run prints one `python,<benchmark>,<min_ms>` line
//! per kernel as soon as it finishes and nothing else on stdout.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = microperf_cli::run() {
//!         eprintln!("Error: {:#}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    BenchExecutionResult, ExecutionConfig, Executor, build_report, format_human_output,
};
pub use planner::{ExecutionPlan, build_plan};

use anyhow::Context;
use clap::{Parser, Subcommand};
use microperf_core::{BenchmarkDef, pin_to_cpu, registered_benchmarks};
use microperf_report::{
    OutputFormat, format_perf_line, generate_csv_report, generate_json_report,
    generate_perf_report,
};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Microperf CLI arguments
#[derive(Parser, Debug)]
#[command(name = "microperf")]
#[command(author, version, about = "Microperf - cross-language micro-benchmark suite")]
pub struct Cli {
    /// Optional subcommand (Run, List, Config); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter benchmarks by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Output format: perf, json, csv, human
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Timed runs per benchmark
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Language label written in front of every perf line
    #[arg(long)]
    pub label: Option<String>,

    /// Pin the process to this CPU core before measuring
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (defaults apply if not specified)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run benchmarks (default)
    Run,
    /// List the benchmarks that would run
    List,
    /// Print a default microperf.toml
    Config,
}

/// Settings after layering CLI flags over the config file
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Benchmark name filter
    pub filter: Regex,
    /// Report format
    pub format: OutputFormat,
    /// Report destination (stdout if `None`)
    pub output: Option<PathBuf>,
    /// Language label
    pub label: String,
    /// Execution settings
    pub execution: ExecutionConfig,
}

impl RunSettings {
    /// Build settings by layering: defaults → microperf.toml → CLI flags.
    pub fn resolve(cli: &Cli, config: &MicroperfConfig) -> anyhow::Result<Self> {
        let filter = Regex::new(&cli.filter)
            .with_context(|| format!("invalid benchmark filter `{}`", cli.filter))?;

        let format: OutputFormat = cli
            .format
            .as_deref()
            .unwrap_or(&config.output.format)
            .parse()
            .map_err(anyhow::Error::msg)?;

        let samples = cli.samples.unwrap_or(config.runner.samples);
        if samples == 0 {
            anyhow::bail!("sample count must be at least 1");
        }

        Ok(Self {
            filter,
            format,
            output: cli.output.clone().or_else(|| config.output.path.clone()),
            label: cli
                .label
                .clone()
                .unwrap_or_else(|| config.output.label.clone()),
            execution: ExecutionConfig {
                samples,
                pin_cpu: cli.pin_cpu.or(config.runner.pin_cpu),
                show_progress: format == OutputFormat::Human,
            },
        })
    }
}

/// Run the Microperf CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` when every benchmark passed, or the first error.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Microperf CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    if let Some(Commands::Config) = cli.command {
        print!("{}", MicroperfConfig::default_toml());
        return Ok(());
    }

    let config = MicroperfConfig::load_or_default(cli.config.as_deref())?;
    let settings = RunSettings::resolve(&cli, &config)?;

    match cli.command {
        Some(Commands::List) => list_benchmarks(&settings),
        _ => run_benchmarks(&settings),
    }
}

/// Logging goes to stderr so stdout carries only report output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "microperf=debug"
    } else {
        "microperf=warn"
    };
    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn plan(settings: &RunSettings) -> Vec<&'static BenchmarkDef> {
    planner::build_plan(registered_benchmarks(), Some(&settings.filter)).benchmarks
}

fn list_benchmarks(settings: &RunSettings) -> anyhow::Result<()> {
    println!("Microperf Plan:");

    let benchmarks = plan(settings);
    for bench in &benchmarks {
        let oracle = if bench.oracle_fn.is_some() {
            ", oracle"
        } else {
            ""
        };
        println!(
            "├── {} ({} samples{}) {} ({}:{})",
            bench.id,
            settings.execution.samples_for(bench),
            oracle,
            bench.description,
            bench.file,
            bench.line
        );
    }

    println!("{} benchmarks found.", benchmarks.len());
    Ok(())
}

fn run_benchmarks(settings: &RunSettings) -> anyhow::Result<()> {
    let benchmarks = plan(settings);
    if benchmarks.is_empty() {
        tracing::warn!(filter = %settings.filter, "no benchmarks match the filter");
        return Ok(());
    }

    if let Some(cpu) = settings.execution.pin_cpu {
        match pin_to_cpu(cpu) {
            Ok(()) => tracing::info!(cpu, "pinned to CPU"),
            Err(e) => tracing::warn!(cpu, error = %e, "failed to pin CPU, continuing unpinned"),
        }
    }

    // Perf lines to stdout are written as each benchmark finishes, so a
    // failure leaves the earlier lines in place.
    let stream = settings.format == OutputFormat::Perf && settings.output.is_none();

    let start_time = Instant::now();
    let executor = Executor::new(settings.execution.clone());
    let results = executor.execute(&benchmarks, |result| {
        if stream {
            let mut stdout = std::io::stdout().lock();
            writeln!(
                stdout,
                "{}",
                format_perf_line(&settings.label, &result.benchmark_id, result.min.millis())
            )?;
            stdout.flush()?;
        }
        Ok(())
    })?;

    if stream {
        return Ok(());
    }

    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let report = build_report(
        &results,
        &settings.execution,
        &settings.label,
        total_duration_ms,
    );

    let output = match settings.format {
        OutputFormat::Perf => generate_perf_report(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = settings.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, output.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}
