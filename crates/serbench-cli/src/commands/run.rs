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

//! The benchmark run: measure, list, export.

use crate::error::{CliError, Result};
use serbench::core::{BenchConfig, FormatRegistry};
use serbench::harness::BenchmarkRunner;
use serbench::reporters::{export_detailed, export_summary, print_header, print_listing};
use serbench::ResultStore;
use std::fs;
use tracing::info;

/// Runs the benchmark described by `config` and writes both reports.
///
/// A non-default baseline is moved to the front of the standard registry so
/// that its rows exist before any other format is scored.
///
/// # Errors
///
/// Returns an error if the configuration is rejected, the output directory
/// is a file or cannot be created, or a report cannot be written. Adapter failures do not
/// abort the run; they appear as failed rows.
pub fn run(config: &BenchConfig) -> Result<()> {
    let mut registry = FormatRegistry::standard();
    if registry.contains(&config.baseline) {
        registry.promote(&config.baseline)?;
    }

    let runner = BenchmarkRunner::new(config.clone(), registry)?;
    let config = runner.config();

    if config.output_dir.is_file() {
        return Err(CliError::invalid_input(format!(
            "output directory '{}' is an existing file",
            config.output_dir.display()
        )));
    }
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| CliError::io_error(&config.output_dir, e))?;

    print_header(config, &runner.registry().names());

    let results = if config.incremental {
        runner.run_with(|tier, store| {
            info!(tier, rows = store.len(), "writing partial results");
            write_reports(config, store)
        })?
    } else {
        runner.run()?
    };

    print_listing(&results);
    write_reports(config, &results)?;

    println!("Detailed results: {}", config.detailed_path().display());
    println!("Summary:          {}", config.summary_path().display());
    Ok(())
}

fn write_reports(config: &BenchConfig, results: &ResultStore) -> serbench::Result<()> {
    export_detailed(results, &config.detailed_path())?;
    export_summary(results, &config.summary_path())?;
    info!(
        rows = results.len(),
        dir = %config.output_dir.display(),
        "reports written"
    );
    Ok(())
}
