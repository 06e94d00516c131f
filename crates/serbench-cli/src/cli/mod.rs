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

//! Command-line arguments and their mapping onto [`BenchConfig`].

use crate::commands;
use crate::error::Result;
use clap::Args;
use serbench::core::{BenchConfig, Precision, DEFAULT_BASELINE, DEFAULT_REPEATS, STANDARD_TIERS};
use serbench::datasets::DEFAULT_SEED;
use std::path::PathBuf;

/// Benchmark run options.
///
/// Every option has a default, so a bare `serbench` runs the standard tiers
/// over every registered format against the JSON baseline.
#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Item counts to benchmark, comma separated
    #[arg(short, long, value_delimiter = ',', value_name = "N,...")]
    pub tiers: Option<Vec<usize>>,

    /// Formats to run, comma separated (the baseline always runs)
    #[arg(short, long, value_delimiter = ',', value_name = "NAME,...")]
    pub formats: Option<Vec<String>>,

    /// Reference format all scores are relative to
    #[arg(short, long, default_value = DEFAULT_BASELINE)]
    pub baseline: String,

    /// Repetitions per operation
    #[arg(short, long, default_value_t = DEFAULT_REPEATS)]
    pub repeats: u32,

    /// Dataset generator seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Decimal digits kept for avg/min/max/stdev
    #[arg(long, default_value_t = Precision::default().stats)]
    pub precision: u32,

    /// Decimal digits kept for raw per-run timings
    #[arg(long, default_value_t = Precision::default().timings)]
    pub timing_precision: u32,

    /// Directory receiving the detailed JSON and the CSV summary
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Rewrite both reports after every tier
    #[arg(long)]
    pub incremental: bool,

    /// Suppress per-combination progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// List registered formats and exit
    #[arg(long)]
    pub list_formats: bool,
}

impl BenchArgs {
    /// Builds the library configuration from the parsed arguments.
    pub fn to_config(&self) -> BenchConfig {
        let tiers = self.tiers.as_deref().unwrap_or(STANDARD_TIERS);
        let mut config = BenchConfig::new(tiers)
            .with_repeats(self.repeats)
            .with_seed(self.seed)
            .with_baseline(self.baseline.clone())
            .with_precision(Precision {
                stats: self.precision,
                timings: self.timing_precision,
            })
            .with_output_dir(self.output_dir.clone())
            .with_incremental(self.incremental)
            .with_progress(!self.quiet);

        if let Some(formats) = &self.formats {
            config = config.with_formats(formats.iter().cloned());
        }
        config
    }

    /// Runs the command selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a report cannot
    /// be written.
    pub fn execute(&self) -> Result<()> {
        if self.list_formats {
            commands::list_formats();
            return Ok(());
        }
        commands::run(&self.to_config())
    }
}
