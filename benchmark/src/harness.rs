// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for running and timing async operations.
//!
//! Each run performs a number of untimed warmup executions followed by the
//! timed ones, and summarizes the timed samples as a [`ResultSet`].
//! Executions are strictly sequential: an operation and its cleanup are
//! awaited to completion before the next execution starts.

use std::future::{self, Future};
use std::time::{Duration, Instant};

use serbench_core::HarnessError;

use crate::metrics::ResultSet;

/// Default number of timed executions.
pub const DEFAULT_ITERATIONS: u64 = 10;
/// Default number of untimed warmup executions.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 5;

/// Upper bound on samples reserved up front; larger runs grow on demand.
const MAX_PREALLOCATED_SAMPLES: u64 = 1 << 16;

/// A benchmark harness for measuring operation latency.
///
/// The harness holds no state between runs, so one instance can time any
/// number of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkHarness {
    /// Number of warmup iterations before measurement
    warmup_iterations: u64,
    /// Number of measurement iterations
    measurement_iterations: u64,
}

impl BenchmarkHarness {
    /// Create a new benchmark harness with default settings.
    pub fn new() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            measurement_iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Set the number of warmup iterations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the number of measurement iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    pub fn warmup_iterations(&self) -> u64 {
        self.warmup_iterations
    }

    pub fn measurement_iterations(&self) -> u64 {
        self.measurement_iterations
    }

    /// Time `operation` with no cleanup between executions.
    ///
    /// See [`BenchmarkHarness::run_with_cleanup`].
    pub async fn run<T, E, Op, OpFut>(&self, operation: Op) -> Result<ResultSet, E>
    where
        Op: FnMut() -> OpFut,
        OpFut: Future<Output = Result<T, E>>,
        E: From<HarnessError>,
    {
        self.run_with_cleanup(operation, || future::ready(Ok::<(), E>(())))
            .await
    }

    /// Time `operation`, running `cleanup` after every execution.
    ///
    /// Cleanup runs after warmup executions too, and is never part of a
    /// sample. The first error from either closure ends the run and is
    /// returned unchanged; if `operation` fails, its paired cleanup is
    /// skipped. A zero iteration count is rejected before anything runs.
    pub async fn run_with_cleanup<T, E, Op, OpFut, Cl, ClFut>(
        &self,
        mut operation: Op,
        mut cleanup: Cl,
    ) -> Result<ResultSet, E>
    where
        Op: FnMut() -> OpFut,
        OpFut: Future<Output = Result<T, E>>,
        Cl: FnMut() -> ClFut,
        ClFut: Future<Output = Result<(), E>>,
        E: From<HarnessError>,
    {
        if self.measurement_iterations == 0 {
            return Err(HarnessError::NoIterations.into());
        }

        tracing::debug!(
            iterations = self.measurement_iterations,
            warmup = self.warmup_iterations,
            "Starting benchmark run"
        );

        // Warmup phase
        for _ in 0..self.warmup_iterations {
            operation().await?;
            cleanup().await?;
        }

        // Measurement phase
        let mut samples =
            Vec::with_capacity(self.measurement_iterations.min(MAX_PREALLOCATED_SAMPLES) as usize);
        for _ in 0..self.measurement_iterations {
            let timer = Timer::start();
            operation().await?;
            let elapsed_ms = timer.stop();

            cleanup().await?;
            samples.push(elapsed_ms);
        }

        let result = ResultSet::from_samples(samples)?;
        tracing::debug!(
            mean_ms = result.mean,
            median_ms = result.median,
            "Benchmark run complete"
        );
        Ok(result)
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer for measuring individual operations.
///
/// Captures a local monotonic instant; there is no shared registry of marks.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed milliseconds.
    pub fn stop(self) -> f64 {
        duration_to_millis(self.start.elapsed())
    }
}

fn duration_to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
