// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `serbench run` command - Run the round-trip benchmark.

use std::path::Path;

use serbench_benchmark::metrics::format_millis;
use serbench_benchmark::{render_table, BenchmarkHarness, JsonReporter, ResultSet, Suite, SuiteRow};
use serbench_core::{Config, ConfigLoader, ListSize, SerbenchResult};

pub async fn execute(
    config_path: Option<&Path>,
    sizes: &[ListSize],
    scratch_dir: &Path,
    report_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sizes = resolve_sizes(config_path, sizes)?;
    let harness = BenchmarkHarness::new();

    let labels: Vec<String> = sizes.iter().map(|s| s.label()).collect();
    println!("serbench round-trip benchmark");
    println!("=============================");
    println!("List sizes: {}", labels.join(", "));
    println!(
        "Iterations: {} (warmup: {})",
        harness.measurement_iterations(),
        harness.warmup_iterations()
    );
    println!();

    let suite = Suite::new(harness, scratch_dir);
    let rows = suite.run(&sizes).await?;

    println!();
    print!("{}", render_table(&rows));
    println!();
    print_summary(&rows);

    if let Some(dir) = report_dir {
        let reporter = JsonReporter::new(dir)?;
        let path = reporter.save(&suite.report(&rows))?;
        println!();
        println!("Benchmark report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(rows: &[SuiteRow]) {
    println!("Summary");
    println!("-------");

    for row in rows {
        for (format, timing) in &row.timings {
            println!(
                "{} {} ({} bytes): {}; {}",
                format,
                row.size.label(),
                timing.payload_bytes,
                describe("write", &timing.write),
                describe("read", &timing.read)
            );
        }
    }
}

fn describe(phase: &str, result: &ResultSet) -> String {
    format!(
        "{} median={}, mean={}, min={}, max={}, std_dev={}",
        phase,
        format_millis(result.median),
        format_millis(result.mean),
        format_millis(result.min()),
        format_millis(result.max()),
        format_millis(result.std_dev())
    )
}

/// Sizes from flags win over the config file; with neither, use defaults.
fn resolve_sizes(config_path: Option<&Path>, sizes: &[ListSize]) -> SerbenchResult<Vec<ListSize>> {
    if !sizes.is_empty() {
        let raw: Vec<u64> = sizes.iter().map(|s| s.value()).collect();
        return ConfigLoader::validate_sizes(&raw);
    }

    match config_path {
        Some(path) => Ok(ConfigLoader::load_file(path)?.list_sizes),
        None => Ok(Config::default().list_sizes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{HardValidationError, SerbenchError};
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_config() {
        let sizes = [ListSize::new(42).unwrap()];
        let missing = PathBuf::from("/nonexistent/serbench.yaml");

        let resolved = resolve_sizes(Some(missing.as_path()), &sizes).unwrap();
        assert_eq!(resolved, sizes.to_vec());
    }

    #[test]
    fn test_duplicate_flags_rejected() {
        let size = ListSize::new(42).unwrap();
        let result = resolve_sizes(None, &[size, size]);
        assert!(matches!(
            result,
            Err(SerbenchError::HardValidation(
                HardValidationError::DuplicateListSize { size: 42 }
            ))
        ));
    }

    #[test]
    fn test_defaults_without_config() {
        let resolved = resolve_sizes(None, &[]).unwrap();
        assert_eq!(resolved, Config::default().list_sizes);
    }

    #[test]
    fn test_missing_config_file() {
        let missing = PathBuf::from("/nonexistent/serbench.yaml");
        assert!(matches!(
            resolve_sizes(Some(missing.as_path()), &[]),
            Err(SerbenchError::ConfigNotFound { .. })
        ));
    }
}
