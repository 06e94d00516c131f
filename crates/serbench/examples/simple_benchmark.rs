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

//! Minimal benchmark example showing how to use the library.
//!
//! This example demonstrates:
//! - Restricting the run to a few formats and small tiers
//! - Running the benchmark with the process CPU clock
//! - Exporting the detailed JSON and the CSV summary
//!
//! Run with:
//! ```bash
//! cargo run --package serbench --example simple_benchmark
//! ```

use serbench::core::{BenchConfig, FormatRegistry, QUICK_TIERS};
use serbench::harness::BenchmarkRunner;
use serbench::reporters::{export_detailed, export_summary, print_header, print_listing};
use std::fs;

fn main() -> serbench::Result<()> {
    println!("=== Simple Benchmark Example ===\n");

    // 1. Configure a short run
    let config = BenchConfig::default()
        .with_tiers(QUICK_TIERS)
        .with_repeats(3)
        .with_formats(["msgpack", "cbor", "parquet"])
        .with_output_dir("target/demo/simple_benchmark");

    // 2. Build the runner; the format filter is applied here
    let runner = BenchmarkRunner::new(config, FormatRegistry::standard())?;
    print_header(runner.config(), &runner.registry().names());

    // 3. Run
    let results = runner.run()?;
    print_listing(&results);

    // 4. Export
    fs::create_dir_all(&runner.config().output_dir)?;
    export_detailed(&results, &runner.config().detailed_path())?;
    export_summary(&results, &runner.config().summary_path())?;

    println!(
        "Reports written to {}",
        runner.config().output_dir.display()
    );
    Ok(())
}
