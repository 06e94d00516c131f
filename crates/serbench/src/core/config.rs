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

//! Centralized benchmark configuration.
//!
//! Provides the run parameters: item-count tiers, repetitions, seed,
//! baseline format, rounding and export locations.

use crate::core::measurement::{Precision, DEFAULT_REPEATS};
use crate::datasets::DEFAULT_SEED;
use crate::error::{BenchError, Result};
use std::path::PathBuf;

/// Standard item-count tiers.
pub const STANDARD_TIERS: &[usize] = &[1, 1_000, 10_000, 100_000, 1_000_000];

/// Small tiers for quick runs and tests.
pub const QUICK_TIERS: &[usize] = &[1, 100, 1_000];

/// Default reference format.
pub const DEFAULT_BASELINE: &str = "json";

/// Default detailed results file name.
pub const DETAILED_RESULTS_FILE: &str = "detailed-results.json";

/// Default summary file name.
pub const SUMMARY_RESULTS_FILE: &str = "results-summary.csv";

/// Largest supported rounding precision.
pub const MAX_PRECISION: u32 = 15;

/// Centralized benchmark configuration.
///
/// # Example
///
/// ```
/// use serbench::core::config::{BenchConfig, QUICK_TIERS};
///
/// let config = BenchConfig::default()
///     .with_tiers(QUICK_TIERS)
///     .with_repeats(3)
///     .with_formats(["json", "msgpack"]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_tier(), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Item counts to benchmark, ascending and unique.
    pub tiers: Vec<usize>,
    /// Repetitions per operation.
    pub repeats: u32,
    /// Generator seed.
    pub seed: u64,
    /// Reference format name.
    pub baseline: String,
    /// Formats to run; `None` runs every registered format.
    pub formats: Option<Vec<String>>,
    /// Rounding for measurements.
    pub precision: Precision,
    /// Directory receiving the export files.
    pub output_dir: PathBuf,
    /// Detailed results file name.
    pub detailed_file: String,
    /// Summary file name.
    pub summary_file: String,
    /// Export after every tier rather than only at the end.
    pub incremental: bool,
    /// Print per-combination progress lines.
    pub show_progress: bool,
}

impl BenchConfig {
    /// Creates a configuration for the given tiers with defaults elsewhere.
    pub fn new(tiers: &[usize]) -> Self {
        Self {
            tiers: normalize_tiers(tiers),
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            baseline: DEFAULT_BASELINE.to_string(),
            formats: None,
            precision: Precision::default(),
            output_dir: PathBuf::from("."),
            detailed_file: DETAILED_RESULTS_FILE.to_string(),
            summary_file: SUMMARY_RESULTS_FILE.to_string(),
            incremental: false,
            show_progress: true,
        }
    }

    /// Sets tiers; they are sorted and deduplicated.
    pub fn with_tiers(mut self, tiers: &[usize]) -> Self {
        self.tiers = normalize_tiers(tiers);
        self
    }

    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Restricts the run to the named formats (the baseline is always kept).
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_incremental(mut self, incremental: bool) -> Self {
        self.incremental = incremental;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Largest tier, i.e. the dataset size generated for the run.
    pub fn max_tier(&self) -> usize {
        self.tiers.iter().copied().max().unwrap_or(0)
    }

    /// Full path of the detailed results file.
    pub fn detailed_path(&self) -> PathBuf {
        self.output_dir.join(&self.detailed_file)
    }

    /// Full path of the summary file.
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] naming the first offending
    /// parameter, or [`BenchError::DatasetTooLarge`] for an oversized tier.
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(BenchError::invalid_config("tiers", "at least one tier is required"));
        }
        if self.tiers.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BenchError::invalid_config(
                "tiers",
                "must be strictly ascending without duplicates",
            ));
        }
        crate::error::validate_dataset_size(self.max_tier())?;

        if self.repeats == 0 {
            return Err(BenchError::invalid_config("repeats", "must be at least 1"));
        }
        if self.baseline.trim().is_empty() {
            return Err(BenchError::invalid_config("baseline", "must not be empty"));
        }
        if let Some(formats) = &self.formats {
            if formats.iter().any(|f| f.trim().is_empty()) {
                return Err(BenchError::invalid_config("formats", "empty format name"));
            }
        }
        for (parameter, digits) in [
            ("precision", self.precision.stats),
            ("timing-precision", self.precision.timings),
        ] {
            if digits > MAX_PRECISION {
                return Err(BenchError::invalid_config(
                    parameter,
                    format!("{} exceeds the maximum of {} digits", digits, MAX_PRECISION),
                ));
            }
        }
        if self.detailed_file == self.summary_file {
            return Err(BenchError::invalid_config(
                "summary_file",
                "must differ from the detailed results file",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(STANDARD_TIERS)
    }
}

fn normalize_tiers(tiers: &[usize]) -> Vec<usize> {
    let mut tiers = tiers.to_vec();
    tiers.sort_unstable();
    tiers.dedup();
    tiers
}
