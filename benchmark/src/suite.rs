// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Round-trip suite: every format at every list size.
//!
//! For each format, and each size in the order given, the suite builds the
//! test list, times serialize-and-write through the harness, then times
//! read-and-deserialize of the file that write produced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serbench_core::{
    build_test_list, read_payload, write_payload, Format, ListSize, SerbenchError,
    SerbenchResult, TestObject,
};
use uuid::Uuid;

use crate::harness::BenchmarkHarness;
use crate::metrics::{BenchmarkReport, BenchmarkResult, Phase, ResultSet};

/// Write and read timings for one format at one list size.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatTiming {
    pub write: ResultSet,
    pub read: ResultSet,
    /// Size of the encoded file on disk
    pub payload_bytes: u64,
}

/// All format timings for one list size.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteRow {
    pub size: ListSize,
    pub timings: BTreeMap<Format, FormatTiming>,
}

/// Drives the harness over every (format, size) pair.
pub struct Suite {
    harness: BenchmarkHarness,
    scratch_dir: PathBuf,
    run_id: Uuid,
}

impl Suite {
    /// Create a suite writing its scratch files under `scratch_dir`.
    pub fn new(harness: BenchmarkHarness, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            harness,
            scratch_dir: scratch_dir.into(),
            run_id: Uuid::new_v4(),
        }
    }

    /// Scratch file shared by the write and read phases of `format`.
    ///
    /// The name carries a per-suite id.
    pub fn scratch_path(&self, format: Format) -> PathBuf {
        self.scratch_dir
            .join(format!("serbench-{}.{}", self.run_id, format.extension()))
    }

    /// Run both formats across `sizes`, returning one row per size.
    ///
    /// Formats run one after the other (all JSON sizes, then all
    /// MessagePack sizes). The first failure aborts the suite.
    pub async fn run(&self, sizes: &[ListSize]) -> SerbenchResult<Vec<SuiteRow>> {
        let mut rows: Vec<SuiteRow> = sizes
            .iter()
            .map(|&size| SuiteRow {
                size,
                timings: BTreeMap::new(),
            })
            .collect();

        for format in Format::ALL {
            for row in rows.iter_mut() {
                let timing = self.run_format(format, row.size).await?;
                row.timings.insert(format, timing);
            }
        }

        Ok(rows)
    }

    /// Time one format at one list size. The scratch file is removed
    /// afterwards whether or not timing succeeded.
    pub async fn run_format(&self, format: Format, size: ListSize) -> SerbenchResult<FormatTiming> {
        tracing::info!(format = %format, size = %size, "Benchmarking");

        let list = build_test_list(size.count());
        let path = self.scratch_path(format);

        let outcome = self.time_round_trip(format, &list, &path).await;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove scratch file");
            }
        }

        if let Ok(timing) = &outcome {
            tracing::info!(
                format = %format,
                size = %size,
                read_median_ms = timing.read.median,
                write_median_ms = timing.write.median,
                payload_bytes = timing.payload_bytes,
                "Finished"
            );
        }
        outcome
    }

    async fn time_round_trip(
        &self,
        format: Format,
        list: &[TestObject],
        path: &Path,
    ) -> SerbenchResult<FormatTiming> {
        let write = self
            .harness
            .run(|| write_payload(format, path, list))
            .await?;

        let payload_bytes = tokio::fs::metadata(path)
            .await
            .map_err(|e| SerbenchError::Io {
                context: "inspecting payload file",
                source: e,
            })?
            .len();

        let read = self
            .harness
            .run(|| read_payload::<Vec<TestObject>>(format, path))
            .await?;

        Ok(FormatTiming {
            write,
            read,
            payload_bytes,
        })
    }

    /// Build a report with one result per (size, format, phase).
    pub fn report(&self, rows: &[SuiteRow]) -> BenchmarkReport {
        let warmup = self.harness.warmup_iterations();
        let mut report = BenchmarkReport::new();

        for row in rows {
            for (&format, timing) in &row.timings {
                for (phase, result) in [
                    (Phase::Write, &timing.write),
                    (Phase::Read, &timing.read),
                ] {
                    report.add_result(
                        BenchmarkResult::new(format, phase, row.size, warmup, result.clone())
                            .with_metadata("payload_bytes", timing.payload_bytes),
                    );
                }
            }
        }

        report
    }
}
