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

//! Flattened CSV summary.
//!
//! One line per row in result-key order. Numeric fields of failed rows (and
//! scores that could not be computed) are left empty.

use crate::error::Result;
use crate::harness::{BenchmarkResult, Outcome, ResultStore};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Summary columns, in order.
pub const SUMMARY_HEADER: [&str; 9] = [
    "name",
    "shape",
    "operation",
    "items",
    "avg",
    "avg_serde",
    "baseline-ratio",
    "baseline-speedup",
    "serialized_size",
];

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn summary_record(result: &BenchmarkResult) -> Vec<String> {
    let mut record = vec![
        result.name.clone(),
        result.shape.to_string(),
        result.operation.to_string(),
        result.items.to_string(),
    ];

    match &result.outcome {
        Outcome::Success {
            measurement,
            avg_serde,
            serialized_size,
            baseline_speedup,
            baseline_ratio,
            ..
        } => record.extend([
            measurement.avg.to_string(),
            avg_serde.to_string(),
            optional(*baseline_ratio),
            optional(*baseline_speedup),
            serialized_size.to_string(),
        ]),
        Outcome::Failure { .. } => record.extend(std::iter::repeat(String::new()).take(5)),
    }

    record
}

/// Writes the summary to any writer.
pub fn write_summary<W: Write>(store: &ResultStore, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(SUMMARY_HEADER)?;
    for result in store.iter() {
        wtr.write_record(summary_record(result))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports the summary as CSV.
pub fn export_summary(store: &ResultStore, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_summary(store, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::baselines::Score;
    use crate::core::Measurement;
    use crate::formats::Shape;
    use crate::harness::{Operation, ResultKey};
    use tempfile::tempdir;

    fn summary_of(store: &ResultStore) -> String {
        let mut out = Vec::new();
        write_summary(store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            summary_of(&ResultStore::new()),
            concat!(
                "name,shape,operation,items,avg,avg_serde,",
                "baseline-ratio,baseline-speedup,serialized_size\n"
            )
        );
    }

    #[test]
    fn test_rows() {
        let m = Measurement {
            avg: 0.002,
            min: 0.001,
            max: 0.003,
            stdev: 0.0008,
            timings: vec![0.001, 0.002, 0.003],
        };
        let scored = ResultKey::new("msgpack", Shape::Associative, Operation::Dump, 1000);
        let mut store = ResultStore::new();
        store
            .insert(BenchmarkResult::success(scored.clone(), m.clone(), 0.0025, 512))
            .unwrap();
        store
            .annotate(
                &scored,
                Ok(Score {
                    speedup: 2.5,
                    ratio: 40.0,
                }),
            )
            .unwrap();
        store
            .insert(BenchmarkResult::success(
                ResultKey::new("msgpack", Shape::Associative, Operation::Load, 1000),
                m,
                0.0025,
                512,
            ))
            .unwrap();
        store
            .insert(BenchmarkResult::failure(
                ResultKey::new("cbor", Shape::Positional, Operation::Dump, 1),
                "cbor encode failed: nope",
            ))
            .unwrap();

        let text = summary_of(&store);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "cbor,positional,dump,1,,,,,");
        assert_eq!(lines[2], "msgpack,associative,dump,1000,0.002,0.0025,40,2.5,512");
        assert_eq!(lines[3], "msgpack,associative,load,1000,0.002,0.0025,,,512");
    }

    #[test]
    fn test_export_summary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results-summary.csv");
        export_summary(&ResultStore::new(), &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("name,shape"));
    }
}
