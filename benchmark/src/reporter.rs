// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Output for suite results.
//!
//! [`render_table`] produces the tab-delimited median table printed to the
//! console. [`JsonReporter`] saves full reports to timestamped JSON files.

use crate::metrics::BenchmarkReport;
use crate::suite::SuiteRow;
use serbench_core::Format;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

const COLUMN_SEPARATOR: &str = ",\t";

/// Round to two decimal places.
pub fn round_to_2dp(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Render the median table: one line per list size, read then write
/// medians for each format.
///
/// ```text
/// list length,	json read,	json write,	msgpack read,	msgpack write
/// 10k,	1.23,	2.5,	0.98,	1.7
/// ```
pub fn render_table(rows: &[SuiteRow]) -> String {
    let mut header = vec!["list length".to_string()];
    for format in Format::ALL {
        header.push(format!("{} read", format));
        header.push(format!("{} write", format));
    }

    let mut lines = vec![header.join(COLUMN_SEPARATOR)];
    for row in rows {
        let mut cells = vec![row.size.label()];
        for format in Format::ALL {
            match row.timings.get(&format) {
                Some(timing) => {
                    cells.push(round_to_2dp(timing.read.median).to_string());
                    cells.push(round_to_2dp(timing.write.median).to_string());
                }
                None => {
                    cells.push("-".to_string());
                    cells.push("-".to_string());
                }
            }
        }
        lines.push(cells.join(COLUMN_SEPARATOR));
    }

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Report file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON reporter for benchmark results.
pub struct JsonReporter {
    /// Output directory for benchmark data
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter with the specified output directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Save a benchmark report to a JSON file named after its timestamp.
    ///
    /// Returns the path to the created file.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%S%.3fZ");
        let filename = format!("roundtrip_{}.json", timestamp);
        let filepath = self.output_dir.join(&filename);

        let file = File::create(&filepath)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, report)?;

        tracing::debug!(path = %filepath.display(), "Saved benchmark report");
        Ok(filepath)
    }

    /// List all existing benchmark files in the output directory.
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReporterError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load an existing benchmark report from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReporterError> {
        let file = File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BenchmarkResult, Phase, ResultSet};
    use crate::suite::FormatTiming;
    use chrono::Duration;
    use serbench_core::ListSize;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn timing(read: f64, write: f64) -> FormatTiming {
        FormatTiming {
            read: ResultSet::from_samples(vec![read]).unwrap(),
            write: ResultSet::from_samples(vec![write]).unwrap(),
            payload_bytes: 0,
        }
    }

    fn sample_report() -> BenchmarkReport {
        let mut report = BenchmarkReport::new();
        report.add_result(BenchmarkResult::new(
            Format::Json,
            Phase::Read,
            ListSize::new(10_000).unwrap(),
            5,
            ResultSet::from_samples(vec![1.0, 2.0, 3.0]).unwrap(),
        ));
        report
    }

    #[test]
    fn test_round_to_2dp() {
        assert_eq!(round_to_2dp(1.23456), 1.23);
        assert_eq!(round_to_2dp(1.2351), 1.24);
        assert_eq!(round_to_2dp(2.0), 2.0);
    }

    #[test]
    fn test_render_table() {
        let mut timings = BTreeMap::new();
        timings.insert(Format::Json, timing(1.23456, 2.5));
        timings.insert(Format::MessagePack, timing(0.981, 3.0));
        let rows = vec![SuiteRow {
            size: ListSize::new(10_000).unwrap(),
            timings,
        }];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "list length,\tjson read,\tjson write,\tmsgpack read,\tmsgpack write"
        );
        assert_eq!(lines[1], "10k,\t1.23,\t2.5,\t0.98,\t3");
    }

    #[test]
    fn test_render_table_missing_format() {
        let mut timings = BTreeMap::new();
        timings.insert(Format::Json, timing(1.0, 1.0));
        let rows = vec![SuiteRow {
            size: ListSize::new(1_000_000).unwrap(),
            timings,
        }];

        let table = render_table(&rows);
        assert!(table.lines().nth(1).unwrap().starts_with("1m,\t1,\t1,\t-,\t-"));
    }

    #[test]
    fn test_reporter_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let path = reporter.save(&sample_report()).unwrap();
        assert!(path.exists());

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].name, "json_read_10k");
        assert_eq!(loaded.results[0].result.samples, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_list_reports() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let first = sample_report();
        let mut second = first.clone();
        second.timestamp = first.timestamp + Duration::seconds(1);

        reporter.save(&first).unwrap();
        reporter.save(&second).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let reports = reporter.list_reports().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0] < reports[1]);
    }

    #[test]
    fn test_load_invalid_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        assert!(matches!(
            JsonReporter::load(&path),
            Err(ReporterError::Serialization(_))
        ));
    }
}
