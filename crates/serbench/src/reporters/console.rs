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

//! Console reporter for benchmark results.
//!
//! Formats and prints the run header, progress lines and the final listing.

use crate::core::config::BenchConfig;
use crate::formats::Shape;
use crate::harness::{BenchmarkResult, Outcome, ResultStore};

/// One-line description of the machine running the benchmark.
pub fn machine_info() -> String {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    format!(
        "{} {}, {} logical cpus, serbench {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        cpus,
        env!("CARGO_PKG_VERSION")
    )
}

/// Prints machine info and the run configuration.
pub fn print_header(config: &BenchConfig, formats: &[&str]) {
    println!("\n{}", "=".repeat(80));
    println!("SERIALIZATION BENCHMARK");
    println!("{}", "=".repeat(80));
    println!("Machine:   {}", machine_info());
    println!("Timestamp: {}", chrono::Utc::now().to_rfc3339());
    println!("Formats:   {}", formats.join(", "));
    println!("Baseline:  {}", config.baseline);
    println!(
        "Tiers:     {}",
        config
            .tiers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Repeats:   {}", config.repeats);
    println!("Seed:      {}", config.seed);
    println!("{}\n", "-".repeat(80));
}

/// Prints one progress line: `{name} {shape} {items}.. {status}`.
pub fn print_progress(name: &str, shape: Shape, items: usize, status: &str) {
    println!("{} {} {}.. {}", name, shape, items, status);
}

/// Formats one listing line.
pub fn format_line(result: &BenchmarkResult) -> String {
    let key = result.key().to_string();
    match &result.outcome {
        Outcome::Success {
            measurement,
            baseline_speedup,
            baseline_ratio,
            error,
            ..
        } => {
            let ratio = baseline_ratio
                .map(|r| format!("{:.2}%", r))
                .unwrap_or_else(|| "n/a".to_string());
            let speedup = baseline_speedup
                .map(|s| format!("x{:.2}", s))
                .unwrap_or_else(|| "n/a".to_string());
            format!(
                "{:<40} avg: {:.5}\tbaseline-ratio: {}\tspeedup: {}\t{}",
                key, measurement.avg, ratio, speedup, error
            )
        }
        Outcome::Failure { reason } => format!("{:<40} FAILED\t{}", key, reason),
    }
}

/// Formats every row in result-key order.
pub fn format_listing(store: &ResultStore) -> Vec<String> {
    store.iter().map(format_line).collect()
}

/// Prints the final sorted listing.
pub fn print_listing(store: &ResultStore) {
    println!("\n{}", "-".repeat(80));
    println!("RESULTS:");
    println!("{}", "-".repeat(80));

    for line in format_listing(store) {
        println!("{}", line.trim_end());
    }

    println!(
        "\n{} results, {} failed, {} skipped",
        store.len(),
        store.failure_count(),
        store.skipped().len()
    );
    println!("{}\n", "=".repeat(80));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::baselines::Score;
    use crate::core::Measurement;
    use crate::harness::{Operation, ResultKey};

    #[test]
    fn test_machine_info() {
        let info = machine_info();
        assert!(info.contains(std::env::consts::OS));
        assert!(info.contains("logical cpus"));
        assert!(info.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_format_lines() {
        let key = ResultKey::new("cbor", Shape::Positional, Operation::Load, 1000);
        let mut store = ResultStore::new();
        store
            .insert(BenchmarkResult::success(
                key.clone(),
                Measurement {
                    avg: 0.012345,
                    min: 0.01,
                    max: 0.015,
                    stdev: 0.001,
                    timings: vec![],
                },
                0.02,
                100,
            ))
            .unwrap();
        store
            .annotate(
                &key,
                Ok(Score {
                    speedup: 3.0,
                    ratio: 33.3333,
                }),
            )
            .unwrap();
        store
            .insert(BenchmarkResult::failure(
                ResultKey::new("yaml", Shape::Positional, Operation::Dump, 1),
                "yaml encode failed: boom",
            ))
            .unwrap();

        let lines = format_listing(&store);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("cbor_positional_load_1000 "));
        assert!(lines[0].contains("avg: 0.0123"));
        assert!(lines[0].contains("baseline-ratio: 33.33%"));
        assert!(lines[0].contains("speedup: x3.00"));
        assert!(lines[1].contains("FAILED\tyaml encode failed: boom"));
    }

    #[test]
    fn test_print_does_not_panic() {
        print_header(&BenchConfig::default(), &["json", "cbor"]);
        print_listing(&ResultStore::new());
    }
}
