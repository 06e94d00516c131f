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

//! Benchmark runner for executing and collecting results.
//!
//! Iterates tier (ascending), then shape, then format in registry order.
//! For each combination it measures serialization, then deserialization of
//! the serialized bytes, checks that no records were lost and records one
//! row per operation. Adapter failures become failure rows; only
//! configuration and bookkeeping errors stop a run.

use crate::core::config::BenchConfig;
use crate::core::measurement::{round_to, try_measure, CpuClock, Measurement, ProcessCpuClock};
use crate::core::registry::FormatRegistry;
use crate::datasets::Dataset;
use crate::error::{BenchError, Result};
use crate::formats::{FormatAdapter, Shape, ShapedData};
use crate::harness::collector::{BenchmarkResult, Operation, ResultKey, ResultStore};
use crate::reporters::console;
use tracing::{debug, info, warn};

/// Measurements of one successful round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    pub dump: Measurement,
    pub load: Measurement,
    pub serialized_size: usize,
}

/// Runner for executing benchmarks with standardized configuration.
pub struct BenchmarkRunner {
    config: BenchConfig,
    registry: FormatRegistry,
    clock: Box<dyn CpuClock>,
}

impl BenchmarkRunner {
    /// Creates a runner, applying the configured format filter to `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if the configuration is invalid,
    /// names an unknown format, or the baseline is not registered first.
    pub fn new(config: BenchConfig, mut registry: FormatRegistry) -> Result<Self> {
        config.validate()?;

        if let Some(formats) = &config.formats {
            registry.retain(formats, &config.baseline)?;
        }

        match registry.names().first() {
            Some(&first) if first == config.baseline => {}
            Some(_) if registry.contains(&config.baseline) => {
                return Err(BenchError::invalid_config(
                    "baseline",
                    format!("'{}' must be the first registered format", config.baseline),
                ))
            }
            _ => {
                return Err(BenchError::invalid_config(
                    "baseline",
                    format!("format '{}' is not registered", config.baseline),
                ))
            }
        }

        Ok(Self {
            config,
            registry,
            clock: Box::new(ProcessCpuClock),
        })
    }

    /// Replaces the CPU clock.
    pub fn with_clock(mut self, clock: impl CpuClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Runs every combination.
    pub fn run(&self) -> Result<ResultStore> {
        self.run_with(|_, _| Ok(()))
    }

    /// Runs every combination, calling `on_tier` with the tier and the
    /// results so far after each tier completes.
    ///
    /// An error from `on_tier` aborts the run.
    pub fn run_with<F>(&self, mut on_tier: F) -> Result<ResultStore>
    where
        F: FnMut(usize, &ResultStore) -> Result<()>,
    {
        let dataset = Dataset::generate(self.config.max_tier(), self.config.seed)?;
        info!(
            records = dataset.len(),
            seed = self.config.seed,
            formats = self.registry.len(),
            "generated dataset"
        );

        let mut store = ResultStore::new();
        for &items in &self.config.tiers {
            for shape in Shape::ALL {
                let data = ShapedData::from_dataset(&dataset, shape, items);
                for adapter in self.registry.iter() {
                    self.bench_combination(adapter, data, &mut store)?;
                }
            }
            on_tier(items, &store)?;
        }

        info!(
            results = store.len(),
            failures = store.failure_count(),
            skipped = store.skipped().len(),
            "benchmark complete"
        );
        Ok(store)
    }

    /// Benchmarks one (format, shape, tier) and records its rows.
    ///
    /// Skipped pairs record nothing but a skip entry.
    pub fn bench_combination(
        &self,
        adapter: &dyn FormatAdapter,
        data: ShapedData<'_>,
        store: &mut ResultStore,
    ) -> Result<()> {
        let name = adapter.name();
        let shape = data.shape();
        let items = data.len();

        if self.registry.is_skipped(shape, name) {
            debug!(format = name, %shape, items, "skipping incompatible combination");
            if self.config.show_progress {
                console::print_progress(name, shape, items, "skip");
            }
            store.record_skip(name, shape, items);
            return Ok(());
        }

        let dump_key = ResultKey::new(name, shape, Operation::Dump, items);
        let load_key = ResultKey::new(name, shape, Operation::Load, items);

        match self.round_trip(adapter, data) {
            Ok(measured) => {
                let avg_serde = round_to(
                    (measured.dump.avg + measured.load.avg) / 2.0,
                    self.config.precision.stats,
                );
                store.insert(BenchmarkResult::success(
                    dump_key.clone(),
                    measured.dump,
                    avg_serde,
                    measured.serialized_size,
                ))?;
                store.insert(BenchmarkResult::success(
                    load_key.clone(),
                    measured.load,
                    avg_serde,
                    measured.serialized_size,
                ))?;

                for key in [&dump_key, &load_key] {
                    let scored = store.score_against_baseline(key, &self.config.baseline);
                    if let Err(err) = &scored {
                        debug!(result = %key, error = %err, "could not score against baseline");
                    }
                    store.annotate(key, scored)?;
                }

                if self.config.show_progress {
                    console::print_progress(name, shape, items, "done");
                }
            }
            Err(err) => {
                warn!(format = name, %shape, items, error = %err, "round trip failed");
                let reason = err.to_string();
                store.insert(BenchmarkResult::failure(dump_key, reason.clone()))?;
                store.insert(BenchmarkResult::failure(load_key, reason))?;

                if self.config.show_progress {
                    console::print_progress(name, shape, items, "failed");
                }
            }
        }

        Ok(())
    }

    /// Measures serialize then deserialize and checks cardinality.
    pub fn round_trip(
        &self,
        adapter: &dyn FormatAdapter,
        data: ShapedData<'_>,
    ) -> Result<RoundTrip> {
        let repeats = self.config.repeats;
        let precision = self.config.precision;
        let clock = &*self.clock;

        let (encoded, dump) = try_measure(clock, repeats, precision, || adapter.serialize(data))?;
        let (decoded, load) = try_measure(clock, repeats, precision, || {
            adapter.deserialize(&encoded, data.shape())
        })?;

        if decoded.len() != data.len() {
            return Err(BenchError::CardinalityMismatch {
                expected: data.len(),
                actual: decoded.len(),
            });
        }

        Ok(RoundTrip {
            dump,
            load,
            serialized_size: encoded.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::QUICK_TIERS;
    use crate::formats::{Decoded, FormatFamily, TextualAdapter};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Clock advancing a fixed step on every read.
    #[derive(Clone)]
    struct TickingClock {
        now: Rc<Cell<Duration>>,
        step: Duration,
    }

    impl CpuClock for TickingClock {
        fn now(&self) -> Duration {
            let t = self.now.get() + self.step;
            self.now.set(t);
            t
        }
    }

    fn ticking(step_ms: u64) -> TickingClock {
        TickingClock {
            now: Rc::new(Cell::new(Duration::ZERO)),
            step: Duration::from_millis(step_ms),
        }
    }

    /// Drops the last record on decode.
    struct LossyAdapter;

    impl FormatAdapter for LossyAdapter {
        fn name(&self) -> &'static str {
            "lossy"
        }

        fn family(&self) -> FormatFamily {
            FormatFamily::Textual
        }

        fn serialize(&self, data: ShapedData<'_>) -> Result<Vec<u8>> {
            TextualAdapter::json().serialize(data)
        }

        fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded> {
            match TextualAdapter::json().deserialize(raw, shape)? {
                Decoded::Records(mut r) => {
                    r.pop();
                    Ok(Decoded::Records(r))
                }
                Decoded::Positional(mut r) => {
                    r.pop();
                    Ok(Decoded::Positional(r))
                }
                other => Ok(other),
            }
        }
    }

    /// Always fails to encode.
    struct BrokenAdapter;

    impl FormatAdapter for BrokenAdapter {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn family(&self) -> FormatFamily {
            FormatFamily::BinaryObject
        }

        fn serialize(&self, _data: ShapedData<'_>) -> Result<Vec<u8>> {
            Err(BenchError::encode("broken", "refusing to encode"))
        }

        fn deserialize(&self, _raw: &[u8], _shape: Shape) -> Result<Decoded> {
            Ok(Decoded::Records(Vec::new()))
        }
    }

    fn quiet(tiers: &[usize]) -> BenchConfig {
        BenchConfig::default()
            .with_tiers(tiers)
            .with_repeats(2)
            .with_progress(false)
    }

    #[test]
    fn test_baseline_must_be_first() {
        let mut registry = FormatRegistry::new();
        registry
            .register(crate::formats::BinaryObjectAdapter::cbor())
            .register(TextualAdapter::json());

        let err = BenchmarkRunner::new(quiet(&[1]), registry).err().unwrap();
        assert!(err.to_string().contains("first"));
    }

    #[test]
    fn test_baseline_must_be_registered() {
        let config = quiet(&[1]).with_baseline("pickle");
        let err = BenchmarkRunner::new(config, FormatRegistry::standard())
            .err()
            .unwrap();
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn test_rows_and_skips() {
        let runner = BenchmarkRunner::new(quiet(&[1, 10]), FormatRegistry::standard()).unwrap();
        let store = runner.run().unwrap();

        // 7 formats x 2 shapes x 2 tiers, minus 2 skipped pairs per tier,
        // two rows each.
        assert_eq!(store.len(), (7 * 2 - 2) * 2 * 2);
        assert_eq!(store.skipped().len(), 4);
        assert_eq!(store.failure_count(), 0);

        for name in ["parquet", "protobuf"] {
            for op in Operation::ALL {
                for items in [1, 10] {
                    let key = ResultKey::new(name, Shape::Associative, op, items);
                    assert!(store.get(&key).is_none(), "{} should be skipped", key);
                }
            }
        }
    }

    #[test]
    fn test_fixed_clock_scores() {
        let runner = BenchmarkRunner::new(quiet(&[10]), FormatRegistry::standard())
            .unwrap()
            .with_clock(ticking(4));
        let store = runner.run().unwrap();

        for row in store.iter() {
            let m = row.measurement().unwrap();
            assert_eq!(m.avg, 0.004, "{}", row.key());
            assert_eq!(m.stdev, 0.0);
            let score = row.score().unwrap();
            assert_eq!(score.speedup, 1.0);
            assert_eq!(score.ratio, 100.0);
        }
    }

    #[test]
    fn test_cardinality_mismatch_is_failure_row() {
        let mut registry = FormatRegistry::new();
        registry
            .register(TextualAdapter::json())
            .register(LossyAdapter);
        let runner = BenchmarkRunner::new(quiet(&[5]), registry).unwrap();
        let store = runner.run().unwrap();

        let key = ResultKey::new("lossy", Shape::Positional, Operation::Load, 5);
        let row = store.get(&key).unwrap();
        assert!(!row.is_success());
        assert!(row.error().unwrap().contains("cardinality"));

        let json = ResultKey::new("json", Shape::Positional, Operation::Load, 5);
        assert!(store.get(&json).unwrap().is_success());
    }

    #[test]
    fn test_adapter_error_does_not_halt() {
        let mut registry = FormatRegistry::new();
        registry
            .register(TextualAdapter::json())
            .register(BrokenAdapter)
            .register(TextualAdapter::yaml());
        let runner = BenchmarkRunner::new(quiet(&[3]), registry).unwrap();
        let store = runner.run().unwrap();

        assert_eq!(store.failure_count(), 4);
        let yaml = ResultKey::new("yaml", Shape::Associative, Operation::Dump, 3);
        assert!(store.get(&yaml).unwrap().is_success());
    }

    #[test]
    fn test_zero_item_tier_is_scored_or_annotated() {
        let runner = BenchmarkRunner::new(quiet(&[0]), FormatRegistry::standard()).unwrap();
        let store = runner.run().unwrap();

        for row in store.iter() {
            assert_eq!(row.items, 0);
            assert!(row.is_success(), "{}", row.key());
            match row.score() {
                Some(_) => assert!(row.error().is_none()),
                None => assert!(row.error().unwrap().contains("zero")),
            }
        }
    }

    #[test]
    fn test_per_tier_callback() {
        let runner = BenchmarkRunner::new(quiet(&[1, 2, 3]), FormatRegistry::standard()).unwrap();
        let mut seen = Vec::new();
        runner
            .run_with(|tier, store| {
                seen.push((tier, store.len()));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, vec![(1, 24), (2, 48), (3, 72)]);
    }

    #[test]
    fn test_callback_error_aborts() {
        let runner = BenchmarkRunner::new(quiet(&[1, 2]), FormatRegistry::standard()).unwrap();
        let err = runner
            .run_with(|_, _| Err(BenchError::ExportError("disk full".into())))
            .unwrap_err();
        assert!(matches!(err, BenchError::ExportError(_)));
    }

    #[test]
    fn test_format_filter() {
        let config = quiet(&[QUICK_TIERS[0]]).with_formats(["cbor"]);
        let runner = BenchmarkRunner::new(config, FormatRegistry::standard()).unwrap();
        assert_eq!(runner.registry().names(), vec!["json", "cbor"]);
    }
}
