// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests for the round-trip suite.
//!
//! These tests run the full flow from configuration to rendered table and
//! saved report against a temporary directory.

use serbench_benchmark::{render_table, BenchmarkHarness, JsonReporter, Phase, Suite};
use serbench_core::{ConfigLoader, Format};
use tempfile::TempDir;

#[tokio::test]
async fn test_config_to_table_and_report() {
    let scratch = TempDir::new().expect("Failed to create scratch dir");
    let reports = TempDir::new().expect("Failed to create report dir");

    let config = ConfigLoader::load_string("list_sizes: [1000, 200]").expect("Invalid config");
    let suite = Suite::new(BenchmarkHarness::new().warmup(1).iterations(2), scratch.path());

    let rows = suite.run(&config.list_sizes).await.expect("Suite failed");

    // Table: header plus one line per configured size, in order
    let table = render_table(&rows);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1k,\t"));
    assert!(lines[2].starts_with("200,\t"));
    for line in &lines[1..] {
        let cells: Vec<&str> = line.split(",\t").collect();
        assert_eq!(cells.len(), 5);
        for cell in &cells[1..] {
            let value: f64 = cell.parse().expect("Median is not numeric");
            assert!(value >= 0.0);
        }
    }

    // Report: 2 sizes x 2 formats x 2 phases
    let reporter = JsonReporter::new(reports.path()).expect("Failed to create reporter");
    let path = reporter.save(&suite.report(&rows)).expect("Failed to save report");
    let loaded = JsonReporter::load(&path).expect("Failed to load report");

    assert_eq!(loaded.results.len(), 8);
    assert!(loaded.results.iter().all(|r| r.iterations == 2));
    assert!(loaded.results.iter().all(|r| r.result.samples.len() == 2));
    assert_eq!(
        loaded
            .results
            .iter()
            .filter(|r| r.format == Format::MessagePack && r.phase == Phase::Read)
            .count(),
        2
    );

    // Scratch directory is left clean
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_consecutive_suites_are_independent() {
    let scratch = TempDir::new().expect("Failed to create scratch dir");
    let config = ConfigLoader::load_string("list_sizes: [50]").expect("Invalid config");
    let harness = BenchmarkHarness::new().warmup(0).iterations(3);

    let first = Suite::new(harness, scratch.path())
        .run(&config.list_sizes)
        .await
        .expect("First suite failed");
    let second = Suite::new(harness, scratch.path())
        .run(&config.list_sizes)
        .await
        .expect("Second suite failed");

    for rows in [&first, &second] {
        let json = &rows[0].timings[&Format::Json];
        assert_eq!(json.write.samples.len(), 3);
        assert_eq!(json.read.samples.len(), 3);
    }
}
