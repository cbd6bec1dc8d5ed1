// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! In-memory codec microbenchmarks.
//!
//! Isolates encode and decode cost from file I/O for both formats, at list
//! sizes small enough for criterion's sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serbench_core::{build_test_list, Format, TestObject};
use std::time::Duration;

/// List sizes to benchmark (number of objects).
const LIST_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Benchmark serialization of the test list.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.measurement_time(Duration::from_secs(5));

    for format in Format::ALL {
        for &size in LIST_SIZES {
            let list = build_test_list(size);
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(
                BenchmarkId::new(format.to_string(), size),
                &list,
                |b, list| {
                    b.iter(|| black_box(format.encode(black_box(list)).ok()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark deserialization of the test list.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(5));

    for format in Format::ALL {
        for &size in LIST_SIZES {
            let bytes = format
                .encode(&build_test_list(size))
                .expect("Failed to encode test list");
            group.throughput(Throughput::Bytes(bytes.len() as u64));

            group.bench_with_input(
                BenchmarkId::new(format.to_string(), size),
                &bytes,
                |b, bytes| {
                    b.iter(|| black_box(format.decode::<Vec<TestObject>>(black_box(bytes)).ok()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
