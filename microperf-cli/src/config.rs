//! Configuration loading from microperf.toml
//!
//! Every setting is optional. A file is read only when named with
//! `--config`; a bare run uses the defaults. Values given on the command
//! line win over the file, and the file wins over the defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Microperf configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MicroperfConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Timed runs per kernel; the minimum is reported
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Pin the process to this core before measuring
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            pin_cpu: None,
        }
    }
}

fn default_samples() -> usize {
    microperf_core::DEFAULT_SAMPLE_COUNT
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "perf", "json", "csv", "human"
    #[serde(default = "default_format")]
    pub format: String,
    /// Language label in front of every perf line
    #[serde(default = "default_label")]
    pub label: String,
    /// Write the report here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            label: default_label(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "perf".to_string()
}
fn default_label() -> String {
    "python".to_string()
}

impl MicroperfConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    /// Load the file named on the command line, or fall back to the defaults.
    ///
    /// Nothing around the working directory is consulted.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Microperf Configuration

[runner]
# Timed runs per kernel; the fastest one is reported
samples = 5
# Pin the process to a CPU core before measuring (uncomment to enable)
# pin_cpu = 0

[output]
# Output format: perf, json, csv, human
format = "perf"
# Language label written in front of every perf line
label = "python"
# Write the report to a file instead of stdout (uncomment to enable)
# path = "target/microperf/results.csv"
"#
        .to_string()
    }
}
