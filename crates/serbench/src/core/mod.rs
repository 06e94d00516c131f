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

//! Core benchmark infrastructure.
//!
//! Provides configuration, CPU-time measurement, baseline scoring and the
//! format registry.
//!
//! # Modules
//!
//! - `config`: Run configuration
//! - `measurement`: Repeated CPU-time measurement and dispersion statistics
//! - `baselines`: Baseline-relative speedup and ratio
//! - `registry`: Ordered format adapters and skip set

pub mod baselines;
pub mod config;
pub mod measurement;
pub mod registry;

// Re-export commonly used types
pub use baselines::{score, Score, SCORE_PRECISION};
pub use config::{
    BenchConfig, DEFAULT_BASELINE, DETAILED_RESULTS_FILE, QUICK_TIERS, STANDARD_TIERS,
    SUMMARY_RESULTS_FILE,
};
pub use measurement::{
    measure, round_to, try_measure, CpuClock, Measurement, Precision, ProcessCpuClock,
    DEFAULT_REPEATS,
};
pub use registry::FormatRegistry;
