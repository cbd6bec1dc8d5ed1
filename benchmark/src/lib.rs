// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! serbench Benchmarking Framework
//!
//! Times JSON and MessagePack file round trips over lists of a fixed object
//! shape at increasing sizes.
//!
//! # Components
//!
//! - **Harness**: runs an async operation through warmup and timed
//!   iterations, with optional per-iteration cleanup
//! - **Metrics**: sample summaries (mean, median) and serializable reports
//! - **Suite**: drives the harness over every format and list size
//! - **Reporter**: console table of medians and JSON report files

pub mod harness;
pub mod metrics;
pub mod reporter;
pub mod suite;

pub use harness::BenchmarkHarness;
pub use metrics::{BenchmarkReport, BenchmarkResult, Phase, ResultSet, SystemInfo};
pub use reporter::{render_table, JsonReporter, ReporterError};
pub use suite::{FormatTiming, Suite, SuiteRow};
