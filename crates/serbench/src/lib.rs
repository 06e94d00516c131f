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

//! Serialization Format Benchmarks
//!
//! Measures how fast different serialization formats encode and decode the
//! same synthetic dataset, and how large their output is, relative to a
//! baseline format.
//!
//! ## Features
//!
//! - **Deterministic dataset**: seeded book records in associative and
//!   positional shapes
//! - **Format adapters**: JSON, YAML, bincode, CBOR, MessagePack, Parquet and
//!   Protocol Buffers behind one trait
//! - **CPU-time measurement**: repeated runs with avg/min/max/stdev
//! - **Baseline scoring**: speedup and ratio against the baseline format
//! - **Export**: detailed JSON, CSV summary and a console listing
//!
//! ## Usage
//!
//! ```no_run
//! use serbench::core::{BenchConfig, FormatRegistry, QUICK_TIERS};
//! use serbench::harness::BenchmarkRunner;
//! use serbench::reporters::{export_detailed, export_summary, print_listing};
//!
//! let config = BenchConfig::default().with_tiers(QUICK_TIERS).with_repeats(5);
//! let runner = BenchmarkRunner::new(config, FormatRegistry::standard())?;
//! let results = runner.run()?;
//!
//! print_listing(&results);
//! export_detailed(&results, &runner.config().detailed_path())?;
//! export_summary(&results, &runner.config().summary_path())?;
//! # Ok::<(), serbench::BenchError>(())
//! ```

pub mod core;
pub mod datasets;
pub mod error;
pub mod formats;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{BenchConfig, FormatRegistry, Measurement, Precision, Score};
pub use datasets::{generate, to_positional, Dataset, PositionalRecord, Record, Review};
pub use error::{validate_dataset_size, BenchError, Result, MAX_DATASET_SIZE};
pub use formats::{Decoded, FormatAdapter, FormatFamily, Shape, ShapedData};
pub use harness::{BenchmarkResult, BenchmarkRunner, Operation, ResultKey, ResultStore};
