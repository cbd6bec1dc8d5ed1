// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `serbench reports` command - List saved benchmark reports.

use std::path::Path;

use serbench_benchmark::JsonReporter;

pub async fn execute(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        println!("No reports found in {}", dir.display());
        return Ok(());
    }

    let reporter = JsonReporter::new(dir)?;
    let reports = reporter.list_reports()?;

    if reports.is_empty() {
        println!("No reports found in {}", dir.display());
        return Ok(());
    }

    for path in &reports {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        match JsonReporter::load(path) {
            Ok(report) => println!(
                "  {:<40} {:>3} result(s)  {}",
                name,
                report.results.len(),
                report.system_info.hostname
            ),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable report");
                println!("  {:<40} (unreadable)", name);
            }
        }
    }

    println!();
    println!("Total: {} report(s)", reports.len());

    Ok(())
}
