// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Metrics types for benchmark results.
//!
//! This module defines the data structures used to summarize timing samples
//! and to serialize complete suite runs.

use chrono::{DateTime, Utc};
use serbench_core::{Format, HarnessError, ListSize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use sysinfo::System;

/// Timed samples from one harness run, with derived statistics.
///
/// All values are in milliseconds. `samples` keeps execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Arithmetic mean of the samples
    pub mean: f64,
    /// Sorted sample at index `(n + 1) / 2`, see [`ResultSet::from_samples`]
    pub median: f64,
    /// Raw samples in the order they were measured
    pub samples: Vec<f64>,
}

impl ResultSet {
    /// Summarize a non-empty set of samples.
    ///
    /// The median is the element at zero-based index `floor((n + 1) / 2)` of
    /// the ascending sort, which is one past the textbook position for odd
    /// `n` and the upper middle element for even `n`. Downstream comparisons
    /// depend on this exact value, so it is kept as-is. For `n == 1` the
    /// index is clamped to the only element.
    ///
    /// Sorting happens on a copy; `samples` is returned untouched.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, HarnessError> {
        if samples.is_empty() {
            return Err(HarnessError::NoSamples);
        }

        let len = samples.len();
        let mean = samples.iter().sum::<f64>() / len as f64;

        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);
        let median = sorted[((len + 1) / 2).min(len - 1)];

        Ok(Self {
            mean,
            median,
            samples,
        })
    }

    /// Number of timed samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fastest sample.
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Slowest sample.
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        let variance = self
            .samples
            .iter()
            .map(|&x| {
                let diff = x - self.mean;
                diff * diff
            })
            .sum::<f64>()
            / self.samples.len() as f64;
        variance.sqrt()
    }
}

/// Format a millisecond value in human-readable form (auto-selects μs/ms/s).
pub fn format_millis(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2}μs", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{:.2}ms", ms)
    } else {
        format!("{:.2}s", ms / 1_000.0)
    }
}

/// Half of a file round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Serialize the list and write it to disk
    Write,
    /// Read the file back and deserialize it
    Read,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Write => write!(f, "write"),
            Phase::Read => write!(f, "read"),
        }
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// A single benchmark result with all associated metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the benchmark, e.g. `json_write_10k`
    pub name: String,
    pub format: Format,
    pub phase: Phase,
    pub list_size: ListSize,
    /// Number of timed iterations
    pub iterations: u64,
    /// Number of untimed warmup iterations
    pub warmup_iterations: u64,
    pub result: ResultSet,
    /// Additional metadata specific to this benchmark
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    /// Create a result for one phase of one format at one list size.
    pub fn new(
        format: Format,
        phase: Phase,
        list_size: ListSize,
        warmup_iterations: u64,
        result: ResultSet,
    ) -> Self {
        Self {
            name: format!("{}_{}_{}", format, phase, list_size.label()),
            format,
            phase,
            list_size,
            iterations: result.len() as u64,
            warmup_iterations,
            result,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result.
    ///
    /// Values that cannot be represented as JSON are skipped.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.metadata.insert(key.into(), value);
            }
            Err(e) => tracing::warn!(error = %e, "Dropping unserializable metadata"),
        }
        self
    }
}

/// Complete benchmark suite report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Framework version
    pub version: String,
    /// Timestamp when benchmarks were run
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Individual benchmark results
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create a new benchmark report.
    pub fn new() -> Self {
        Self {
            benchmark_suite: "serbench-roundtrip".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}
