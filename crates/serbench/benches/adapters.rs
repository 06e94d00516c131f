// serbench - Serialization Format Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-adapter throughput under criterion.
//!
//! Complements the CPU-time harness with criterion's wall-clock statistics
//! for every registered format and supported shape.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serbench::core::FormatRegistry;
use serbench::datasets::{Dataset, DEFAULT_SEED};
use serbench::formats::{Shape, ShapedData};

const SIZES: &[usize] = &[100, 1_000];

fn bench_serialize(c: &mut Criterion) {
    let registry = FormatRegistry::standard();
    let dataset = Dataset::generate(SIZES[SIZES.len() - 1], DEFAULT_SEED).unwrap();
    let mut group = c.benchmark_group("serialize");

    for &size in SIZES {
        for shape in Shape::ALL {
            let data = ShapedData::from_dataset(&dataset, shape, size);
            for adapter in registry.iter() {
                if registry.is_skipped(shape, adapter.name()) {
                    continue;
                }
                group.throughput(Throughput::Elements(size as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", adapter.name(), shape), size),
                    &data,
                    |b, data| b.iter(|| adapter.serialize(black_box(*data)).unwrap()),
                );
            }
        }
    }

    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let registry = FormatRegistry::standard();
    let dataset = Dataset::generate(SIZES[SIZES.len() - 1], DEFAULT_SEED).unwrap();
    let mut group = c.benchmark_group("deserialize");

    for &size in SIZES {
        for shape in Shape::ALL {
            let data = ShapedData::from_dataset(&dataset, shape, size);
            for adapter in registry.iter() {
                if registry.is_skipped(shape, adapter.name()) {
                    continue;
                }
                let encoded = adapter.serialize(data).unwrap();

                group.throughput(Throughput::Bytes(encoded.len() as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", adapter.name(), shape), size),
                    &encoded,
                    |b, encoded| b.iter(|| adapter.deserialize(black_box(encoded), shape).unwrap()),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
